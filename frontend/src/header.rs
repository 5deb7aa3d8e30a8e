use time::Duration;
use yew::prelude::*;
use shared::format_countdown;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub remaining: Duration,
    pub round: u32,
}

#[function_component]
pub fn ArenaHeader(props: &Props) -> Html {
    html! {
        <header class="border-b border-white/10 backdrop-blur-sm bg-black/20">
            <div class={combine_classes(CONTAINER, "py-6")}>
                <div class={FLEX_BETWEEN}>
                    <div>
                        <h1 class={HEADING_LG}>{"AI Art Battle Arena"}</h1>
                        <h2 class="text-lg text-gray-300 mb-1">{"Real-Time AI Art Voting Competition"}</h2>
                        <p class="text-gray-400">
                            {"Vote for your favorite AI-generated artwork based on trending news topics"}
                        </p>
                    </div>
                    <div class="text-right">
                        <div class="flex items-center gap-2 text-white mb-2">
                            <span aria-hidden="true">{"⏱"}</span>
                            <span class="text-xl font-mono" role="timer">{format_countdown(props.remaining)}</span>
                        </div>
                        <span class={combine_classes(BADGE, BADGE_ROUND)}>{format!("Round {}", props.round)}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}
