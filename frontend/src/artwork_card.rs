use yew::prelude::*;
use shared::{artwork, format_share, ArtworkId, VoteButtonState};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: ArtworkId,
    pub votes: u32,
    pub share: f64,
    pub leading: bool,
    pub button: VoteButtonState,
    pub on_vote: Callback<ArtworkId>,
}

#[function_component]
pub fn ArtworkCard(props: &Props) -> Html {
    let artwork = artwork(props.id);
    let user_choice = props.button == VoteButtonState::Voted;
    let title_id = format!("artwork-{}-title", artwork.id);
    let share = format_share(props.share);

    let onclick = {
        let on_vote = props.on_vote.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_vote.emit(id))
    };

    html! {
        <article aria-labelledby={title_id.clone()}>
            <div class={card_style(user_choice, props.leading)}>
                <div class="relative">
                    <img
                        src={artwork.image}
                        alt={format!("AI-generated artwork: {}", artwork.title)}
                        class="w-full h-64 object-cover"
                        loading="lazy"
                    />
                    {if props.leading {
                        html! {
                            <div class="absolute top-4 right-4">
                                <span class={combine_classes(BADGE, BADGE_LEADING)}>{"🏆 Leading"}</span>
                            </div>
                        }
                    } else { html! {} }}
                </div>

                <div class="p-6">
                    <h3 id={title_id} class="text-xl font-bold text-white mb-3">{artwork.title}</h3>

                    <div class="mb-4" aria-label={format!("Voting statistics for {}", artwork.title)}>
                        <div class={combine_classes(FLEX_BETWEEN, "mb-2")}>
                            <span class={TEXT_MUTED}>{format!("Votes: {}", props.votes)}</span>
                            <span class={TEXT_MUTED}>{format!("{}%", share)}</span>
                        </div>
                        <div
                            class={PROGRESS_TRACK}
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-valuenow={share.clone()}
                            aria-label={format!("{} vote percentage", artwork.title)}
                        >
                            <div class={PROGRESS_BAR} style={format!("width: {:.1}%", props.share)} />
                        </div>
                    </div>

                    <button
                        type="button"
                        onclick={onclick}
                        disabled={props.button.is_disabled()}
                        class={vote_button(user_choice)}
                        aria-label={format!("Vote for {}", artwork.title)}
                    >
                        {render_button_content(props.button)}
                    </button>

                    <details class="text-gray-300 text-sm">
                        <summary class="cursor-pointer hover:text-white transition-colors mb-2">
                            {"Read artist's statement"}
                        </summary>
                        <p class="leading-relaxed">{artwork.description}</p>
                    </details>
                </div>
            </div>
        </article>
    }
}

fn render_button_content(state: VoteButtonState) -> Html {
    match state {
        VoteButtonState::Submitting => html! {
            <div class="flex items-center justify-center gap-2">
                <div class={SPINNER} />
                {state.label()}
            </div>
        },
        VoteButtonState::Open => html! {
            <>
                <span class="mr-2" aria-hidden="true">{"⚡"}</span>
                {state.label()}
            </>
        },
        VoteButtonState::Voted | VoteButtonState::Closed => html! { {state.label()} },
    }
}
