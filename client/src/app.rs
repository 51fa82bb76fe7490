use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use photospot_shared::{
    LoadStatus, MapSelection, RegionGradeSnapshot, StripSelection, apply_snapshot_result,
};

use crate::api;
use crate::district_panel::DistrictPanel;
use crate::grade_strip::GradeStrip;
use crate::log;
use crate::map::{GradeLegend, RegionMap};

/// Newtype wrappers so each signal gets a distinct context type.
#[derive(Clone, Copy)]
pub(crate) struct Snapshot(pub RwSignal<RegionGradeSnapshot>);
#[derive(Clone, Copy)]
pub(crate) struct SnapshotStatus(pub RwSignal<LoadStatus>);
#[derive(Clone, Copy)]
pub(crate) struct MapSelectionState(pub RwSignal<MapSelection>);
#[derive(Clone, Copy)]
pub(crate) struct StripSelectionState(pub RwSignal<StripSelection>);

/// Fetch the grade snapshot once. A failed fetch leaves the previous overlay
/// in place; results arriving after the view is gone are dropped.
pub(crate) fn load_snapshot(snapshot: RwSignal<RegionGradeSnapshot>, status: RwSignal<LoadStatus>) {
    status.set(LoadStatus::Loading);
    spawn_local(async move {
        let result = api::fetch_snapshot().await;
        if let Err(e) = &result {
            log::warn(&format!("Weather map fetch failed: {e}"));
        }
        if let Some(next) = snapshot.try_update(|map| apply_snapshot_result(map, result)) {
            status.try_set(next);
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let snapshot = RwSignal::new(RegionGradeSnapshot::new());
    let status = RwSignal::new(LoadStatus::Loading);
    let map_selection = RwSignal::new(MapSelection::new());
    let strip_selection = RwSignal::new(StripSelection::default());

    provide_context(Snapshot(snapshot));
    provide_context(SnapshotStatus(status));
    provide_context(MapSelectionState(map_selection));
    provide_context(StripSelectionState(strip_selection));

    load_snapshot(snapshot, status);

    view! {
        <div style="min-height: 100vh; background: #ffffff; color: #111827; font-family: 'Pretendard', 'Inter', system-ui, sans-serif;">
            <div style="max-width: 1200px; margin: 0 auto; padding: 32px 16px;">
                <header style="margin-bottom: 24px;">
                    <h1 style="font-size: 2.25rem; font-weight: 700; margin-bottom: 8px;">"날씨 지도"</h1>
                    <p style="color: #4b5563; font-size: 1.05rem;">"전국 지역별 실시간 날씨 정보를 확인하세요"</p>
                </header>
                <StatusBanner />
                <div style="display: flex; flex-wrap: wrap; gap: 16px; align-items: stretch;">
                    <section style="flex: 1 1 520px; background: #ffffff; border-radius: 12px; box-shadow: 0 4px 18px rgba(0,0,0,0.08); padding: 20px; display: flex; flex-direction: column;">
                        <h2 style="font-size: 1.4rem; font-weight: 700; color: #1f2937; margin-bottom: 12px;">"한국 날씨 지도"</h2>
                        <GradeLegend />
                        <div style="position: relative; width: 100%; flex: 1; min-height: 480px;">
                            <RegionMap />
                        </div>
                    </section>
                    <aside style="flex: 0 1 320px; background: #ffffff; border-radius: 12px; box-shadow: 0 4px 18px rgba(0,0,0,0.08); padding: 20px;">
                        <DistrictPanel />
                    </aside>
                </div>
                <GradeStrip />
            </div>
        </div>
    }
}

/// Loading note or error with a retry button. Renders nothing once loaded.
#[component]
fn StatusBanner() -> impl IntoView {
    let Snapshot(snapshot) = expect_context();
    let SnapshotStatus(status) = expect_context();

    move || match status.get() {
        LoadStatus::Ready => ().into_any(),
        LoadStatus::Loading => view! {
            <div style="margin-bottom: 16px; color: #6b7280; font-size: 0.9rem;">"날씨 정보를 불러오는 중..."</div>
        }
        .into_any(),
        LoadStatus::Failed(reason) => view! {
            <div
                role="alert"
                style="margin-bottom: 16px; display: flex; align-items: center; gap: 12px; padding: 12px 16px; border-radius: 8px; background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c;"
            >
                <span style="flex: 1;">"날씨 데이터를 불러오는데 실패했습니다." </span>
                <span style="font-family: 'JetBrains Mono', monospace; font-size: 0.7rem; color: #ef4444;">{reason}</span>
                <button
                    style="padding: 6px 14px; border-radius: 8px; background: #3b82f6; color: #ffffff; border: none; cursor: pointer;"
                    on:click=move |_| load_snapshot(snapshot, status)
                >
                    "다시 시도"
                </button>
            </div>
        }
        .into_any(),
    }
}
