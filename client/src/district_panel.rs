use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use photospot_shared::{DistrictOutcome, MapSelection, Resolution, snapshot_grade};

use crate::api;
use crate::app::{MapSelectionState, Snapshot};
use crate::detail::DetailCard;
use crate::log;
use crate::navigation;

/// Side panel for the selected map region: its grade, its districts, and the
/// detail of the chosen district.
#[component]
pub fn DistrictPanel() -> impl IntoView {
    let Snapshot(snapshot) = expect_context();
    let MapSelectionState(selection) = expect_context();

    let region = Memo::new(move |_| selection.with(|s| s.state().region().map(str::to_string)));
    let district = Memo::new(move |_| selection.with(|s| s.state().district().map(str::to_string)));
    let region_grade = Memo::new(move |_| {
        let code = selection.with(|s| s.region_code())?;
        Some(snapshot.with(|map| snapshot_grade(map, code)))
    });
    let detail = Memo::new(move |_| selection.with(|s| snapshot.with(|map| s.detail_view(map))));

    move || {
        let Some(region_name) = region.get() else {
            return view! {
                <div style="color: #6b7280; font-size: 0.9rem; padding: 24px 0; text-align: center;">
                    "지도에서 지역을 선택하세요"
                </div>
            }
            .into_any();
        };

        let districts = selection.with_untracked(|s| s.districts());

        view! {
            <div>
                <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px;">
                    <h3 style="font-size: 1.15rem; font-weight: 700; color: #1f2937;">{region_name}</h3>
                    {move || region_grade.get().map(|grade| {
                        let style = grade.style();
                        view! {
                            <span style="font-size: 0.8rem; color: #4b5563;">{style.icon} " " {style.label}</span>
                        }
                    })}
                </div>
                {move || match district.get() {
                    None => ().into_any(),
                    Some(name) => match detail.get() {
                        Some(record) => view! { <DetailCard detail=record title=name /> }.into_any(),
                        None => view! {
                            <div style="font-size: 0.8rem; color: #6b7280; margin-bottom: 14px;">
                                {name} " 날씨 정보를 불러오는 중..."
                            </div>
                        }
                        .into_any(),
                    },
                }}
                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(88px, 1fr)); gap: 6px; max-height: 520px; overflow-y: auto;">
                    {districts
                        .iter()
                        .map(|&name| {
                            let is_selected = move || district.with(|d| d.as_deref() == Some(name));
                            view! {
                                <button
                                    style="padding: 6px 8px; border-radius: 8px; border: 1px solid #e5e7eb; font-size: 0.8rem; cursor: pointer; transition: background 0.15s, color 0.15s;"
                                    style:background=move || if is_selected() { "#3b82f6" } else { "#f9fafb" }
                                    style:color=move || if is_selected() { "#ffffff" } else { "#374151" }
                                    on:click=move |_| select_district(selection, name)
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    }
}

fn select_district(selection: RwSignal<MapSelection>, district: &'static str) {
    let Some(outcome) = selection.try_update(|s| s.select_district(district)) else {
        return;
    };

    match outcome {
        DistrictOutcome::Ignored => {}
        DistrictOutcome::NoCode => {
            log::warn(&format!("No region code for the selected region; skipping {district}"));
        }
        DistrictOutcome::Dispatched {
            request,
            navigation,
        } => {
            navigation::navigate(&navigation);
            spawn_local(async move {
                let result = api::fetch_detail(&request.code).await;
                if let Err(e) = &result {
                    log::warn(&format!("Detail fetch for {} failed: {e}", request.code));
                }
                let resolution = selection.try_update(|s| s.resolve_detail(request.seq, result));
                if resolution == Some(Resolution::AppliedOutOfOrder) {
                    log::info(&format!("Applied out-of-order detail response #{}", request.seq));
                }
            });
        }
    }
}
