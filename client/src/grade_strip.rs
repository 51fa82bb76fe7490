use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use photospot_shared::colors::tint;
use photospot_shared::{RegionGradeSnapshot, StripCard, StripSelection, strip_cards};

use crate::api;
use crate::app::{Snapshot, StripSelectionState};
use crate::detail::DetailCard;
use crate::log;

/// One card per region in the snapshot. Clicking a card opens its detail
/// below the strip; clicking it again closes it.
#[component]
pub fn GradeStrip() -> impl IntoView {
    let Snapshot(snapshot) = expect_context();
    let StripSelectionState(strip) = expect_context();

    let cards = Memo::new(move |_| snapshot.with(strip_cards));
    let open = Memo::new(move |_| {
        let code = strip.with(|s| s.selected().map(str::to_string))?;
        let label = cards.with(|cards| {
            cards
                .iter()
                .find(|c| c.code == code)
                .map_or_else(|| code.clone(), |c| c.label.clone())
        });
        Some((label, strip.with(|s| s.detail().cloned())))
    });

    view! {
        <section style="margin-top: 24px;">
            <h2 style="font-size: 1.25rem; font-weight: 700; color: #1f2937; margin-bottom: 12px;">"지역별 촬영 등급"</h2>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(120px, 1fr)); gap: 10px;">
                <For
                    each=move || cards.get()
                    key=|card| (card.code.clone(), card.grade)
                    children=move |card: StripCard| strip_card(card, strip, snapshot)
                />
            </div>
            {move || open.get().map(|(label, detail)| match detail {
                Some(record) => view! {
                    <div style="margin-top: 14px;">
                        <DetailCard detail=record title=label show_description=true />
                    </div>
                }
                .into_any(),
                None => view! {
                    <div style="margin-top: 14px; font-size: 0.85rem; color: #6b7280;">
                        {label} " 날씨 정보를 불러오는 중..."
                    </div>
                }
                .into_any(),
            })}
        </section>
    }
}

fn strip_card(
    card: StripCard,
    strip: RwSignal<StripSelection>,
    snapshot: RwSignal<RegionGradeSnapshot>,
) -> impl IntoView {
    let style = card.grade.style();
    let code = card.code.clone();
    let is_open = {
        let code = code.clone();
        move || strip.with(|s| s.selected() == Some(code.as_str()))
    };

    let on_click = move |_| {
        let Some(request) = strip.try_update(|s| s.click(&code)).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_detail(&request.code).await;
            if let Err(e) = &result {
                log::warn(&format!("Detail fetch for {} failed: {e}", request.code));
            }
            let Some(current) = snapshot.try_get_untracked() else {
                return;
            };
            strip.try_update(|s| s.resolve(&request, result, &current));
        });
    };

    view! {
        <button
            style={format!(
                "display: flex; flex-direction: column; align-items: center; gap: 4px; padding: 12px 8px; border-radius: 10px; cursor: pointer; background: {}; transition: box-shadow 0.15s;",
                tint(style.fill_color, 0.18),
            )}
            style:border=move || if is_open() { "2px solid #3b82f6" } else { "1px solid #e5e7eb" }
            on:click=on_click
        >
            <span style="font-size: 1.5rem;">{style.icon}</span>
            <span style="font-weight: 600; font-size: 0.9rem; color: #1f2937;">{card.label}</span>
            <span style="font-size: 0.75rem; color: #4b5563;">{style.label}</span>
        </button>
    }
}
