use time::Duration;
use yew::prelude::*;
use shared::{format_round_duration, VoterEvent};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct LiveStatsProps {
    pub total: u64,
    pub round_duration: Duration,
    pub round: u32,
}

#[function_component]
pub fn LiveStats(props: &LiveStatsProps) -> Html {
    let row = |label: &str, value: String| html! {
        <div class="flex justify-between">
            <span class={TEXT_MUTED}>{label.to_string()}</span>
            <span class="text-white font-semibold">{value}</span>
        </div>
    };

    html! {
        <div class={PANEL}>
            <div class="flex items-center gap-2 mb-4">
                <span class="text-purple-400" aria-hidden="true">{"👥"}</span>
                <h3 class={HEADING_SM}>{"Live Stats"}</h3>
            </div>
            <div class="space-y-3">
                {row("Total Votes", props.total.to_string())}
                {row("Round Duration", format_round_duration(props.round_duration))}
                {row("Current Round", format!("#{}", props.round))}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecentVotersProps {
    pub events: Vec<VoterEvent>,
}

#[function_component]
pub fn RecentVoters(props: &RecentVotersProps) -> Html {
    html! {
        <div class={PANEL}>
            <div class="flex items-center gap-2 mb-4">
                <span class="text-purple-400" aria-hidden="true">{"🌐"}</span>
                <h3 class={HEADING_SM}>{"Recent Voters"}</h3>
            </div>
            <div class="space-y-2" role="log" aria-live="polite" aria-label="Recent voting activity">
                {for props.events.iter().enumerate().map(|(index, event)| html! {
                    <div
                        key={format!("{}-{}", event.at.unix_timestamp_nanos(), index)}
                        class="flex items-center justify-between text-sm"
                    >
                        <div class="flex items-center gap-2">
                            <span class="text-xl" role="img" aria-label="Country flag">{event.origin.flag()}</span>
                            <span class={TEXT_MUTED}>
                                {if event.origin.is_local() { "you voted for" } else { "voted for" }}
                            </span>
                        </div>
                        <span class={combine_classes(BADGE, BADGE_OUTLINE)}>{format!("Artwork {}", event.artwork)}</span>
                    </div>
                })}
                {if props.events.is_empty() {
                    html! { <p class={TEXT_FAINT}>{"No votes yet this round"}</p> }
                } else { html! {} }}
            </div>
        </div>
    }
}
