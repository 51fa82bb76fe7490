use leptos::prelude::*;

use photospot_shared::catalog::MAP_VIEW_BOX;
use photospot_shared::{
    Grade, MapSelection, NamedGrades, RegionShape, build_overlay, grades_by_name,
};

use crate::app::{MapSelectionState, Snapshot};
use crate::log;

/// Korea region map. Each region is filled by its snapshot grade; once a
/// region is selected the others are dimmed.
#[component]
pub fn RegionMap() -> impl IntoView {
    let Snapshot(snapshot) = expect_context();
    let MapSelectionState(selection) = expect_context();

    let named = Memo::new(move |_| snapshot.with(grades_by_name));
    let selected_region =
        Memo::new(move |_| selection.with(|s| s.state().region().map(str::to_string)));
    let shapes = Memo::new(move |_| {
        let selected = selected_region.get();
        named.with(|named| build_overlay(named, selected.as_deref()).0)
    });

    let (_, missing) = build_overlay(&NamedGrades::default(), None);
    for name in missing {
        log::warn(&format!("No boundary path for region {name}"));
    }

    Effect::new(move |_| {
        named.with(|named| {
            for code in &named.unknown_codes {
                log::warn(&format!("Unknown region code in weather map: {code}"));
            }
        });
    });

    view! {
        <svg
            viewBox=MAP_VIEW_BOX
            preserveAspectRatio="xMidYMid meet"
            style="width: 100%; height: 100%; display: block;"
        >
            <For
                each=move || shapes.with(|shapes| shapes.iter().map(|s| s.name).collect::<Vec<_>>())
                key=|name| *name
                children=move |name: &'static str| {
                    let shape = Memo::new(move |_| {
                        shapes.with(|shapes| shapes.iter().find(|s| s.name == name).cloned())
                    });
                    region_path(name, shape, selection)
                }
            />
        </svg>
    }
}

fn region_path(
    name: &'static str,
    shape: Memo<Option<RegionShape>>,
    selection: RwSignal<MapSelection>,
) -> impl IntoView {
    let attr = move |f: fn(&RegionShape) -> String| {
        move || shape.with(|s| s.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <path
            d=attr(|s| s.path.to_string())
            fill=attr(|s| s.fill.to_string())
            opacity=attr(|s| s.opacity.to_string())
            stroke=attr(|s| s.stroke.to_string())
            stroke-width=attr(|s| s.stroke_width.to_string())
            style="cursor: pointer; transition: fill 0.3s, opacity 0.3s, stroke-width 0.2s;"
            on:click=move |_| selection.update(|s| s.select_region(name))
        >
            <title>
                {move || {
                    shape.with(|s| {
                        s.as_ref()
                            .map(|s| format!("{} · {}", s.name, s.grade.style().label))
                            .unwrap_or_default()
                    })
                }}
            </title>
        </path>
    }
}

#[component]
pub fn GradeLegend() -> impl IntoView {
    view! {
        <div style="display: flex; flex-wrap: wrap; gap: 14px; margin-bottom: 12px;">
            {Grade::ALL
                .iter()
                .map(|grade| {
                    let style = grade.style();
                    view! {
                        <div style="display: flex; align-items: center; gap: 6px; font-size: 0.8rem; color: #4b5563;">
                            <span style={format!(
                                "display: inline-block; width: 14px; height: 14px; border-radius: 3px; border: 1px solid #d1d5db; background: {};",
                                style.fill_color,
                            )}></span>
                            <span>{style.icon} " " {style.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
