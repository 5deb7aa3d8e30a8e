use yew::prelude::*;
use tracing::{error, info};
use shared::{ArenaConfig, ArtworkId, Standings};

mod analytics;
mod arena_store;
mod artwork_card;
mod config;
mod header;
mod live_stats;
mod styles;
mod tasks;

use crate::{
    analytics::Analytics,
    arena_store::use_arena,
    artwork_card::ArtworkCard,
    config::CONFIG,
    header::ArenaHeader,
    live_stats::{LiveStats, RecentVoters},
    styles::*,
};

#[derive(Properties, PartialEq)]
struct ArenaProps {
    config: ArenaConfig,
}

#[function_component(ArenaView)]
fn arena_view(props: &ArenaProps) -> Html {
    let handle = use_arena(props.config);
    let state = &handle.state;
    let standings = Standings::from_tally(state.tally());
    let round = state.round();

    html! {
        <>
            <ArenaHeader remaining={round.remaining} round={round.number} />
            <main class={combine_classes(CONTAINER, "py-8")}>
                <section aria-label="AI Art Battle Arena">
                    <h2 class="sr-only">{"Current Art Battle"}</h2>
                    <div class="grid lg:grid-cols-2 gap-8 mb-8">
                        {for ArtworkId::ALL.into_iter().map(|id| html! {
                            <ArtworkCard
                                key={id.to_string()}
                                id={id}
                                votes={state.tally().get(id)}
                                share={standings.share(id)}
                                leading={standings.is_leading(id)}
                                button={state.button_state(id)}
                                on_vote={handle.vote.clone()}
                            />
                        })}
                    </div>
                </section>

                <section aria-label="Live voting statistics and recent activity">
                    <h2 class="sr-only">{"Live Statistics"}</h2>
                    <div class="grid md:grid-cols-2 gap-6">
                        <LiveStats total={standings.total} round_duration={round.duration} round={round.number} />
                        <RecentVoters events={state.log().iter().copied().collect::<Vec<_>>()} />
                    </div>
                </section>
            </main>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let body = match CONFIG.arena.validate() {
        Ok(()) => html! { <ArenaView config={CONFIG.arena} /> },
        Err(e) => html! {
            <main class={combine_classes(CONTAINER, "py-8")}>
                <div class="p-4 rounded-lg bg-red-500 text-white shadow-lg">{e.to_string()}</div>
            </main>
        },
    };

    html! {
        <div class={PAGE}>
            {body}
            <footer class="border-t border-white/10 mt-16">
                <div class={combine_classes(CONTAINER, "py-6")}>
                    <p class={combine_classes(TEXT_FAINT, "text-center")}>
                        {"AI Art Battle Arena - Where creativity meets competition. Powered by artificial intelligence and human creativity."}
                    </p>
                </div>
            </footer>
            {match CONFIG.analytics_script {
                Some(src) => html! { <Analytics src={src} /> },
                None => html! {},
            }}
        </div>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));

    match CONFIG.arena.validate() {
        Ok(()) => info!("🎨 Starting AI Art Battle Arena"),
        Err(e) => error!("Invalid arena configuration: {}", e),
    }
    yew::Renderer::<App>::new().render();
}
