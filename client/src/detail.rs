use leptos::prelude::*;

use photospot_shared::RegionGradeDetail;
use photospot_shared::colors::tint;

use crate::time_format::{format_measured_at, format_reading, local_now};

/// Label/value rows for the readings present in a detail record.
pub fn reading_rows(detail: &RegionGradeDetail) -> Vec<(&'static str, String)> {
    let mut rows = Vec::with_capacity(6);
    if let Some(v) = detail.temperature {
        rows.push(("🌡️ 기온", format_reading(v, "°C")));
    }
    if let Some(v) = detail.humidity {
        rows.push(("💧 습도", format_reading(v, "%")));
    }
    if let Some(v) = detail.wind_speed {
        rows.push(("💨 풍속", format_reading(v, "m/s")));
    }
    if let Some(v) = detail.pm10 {
        rows.push(("🌫️ PM10", format_reading(v, "㎍/㎥")));
    }
    if let Some(v) = detail.pm25 {
        rows.push(("🌫️ PM2.5", format_reading(v, "㎍/㎥")));
    }
    if let Some(condition) = &detail.condition {
        rows.push(("☁️ 날씨", condition.clone()));
    }
    rows
}

/// Grade badge plus whatever readings the record carries. A degraded record
/// renders as the badge alone.
#[component]
pub fn DetailCard(
    detail: RegionGradeDetail,
    #[prop(into)] title: String,
    #[prop(optional)] show_description: bool,
) -> impl IntoView {
    let style = detail.grade.style();
    let rows = reading_rows(&detail);
    let measured = format_measured_at(&detail, local_now());
    let score = detail.score;

    view! {
        <div style="background: #f8fafc; border: 1px solid #e5e7eb; border-radius: 10px; padding: 12px 14px; margin-bottom: 14px;">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 8px;">
                <span style="font-size: 1.6rem;">{style.icon}</span>
                <div style="flex: 1; min-width: 0;">
                    <div style="font-weight: 600; color: #1f2937; font-size: 0.95rem;">{title}</div>
                    <span style={format!(
                        "display: inline-block; margin-top: 2px; padding: 1px 10px; border-radius: 999px; font-size: 0.75rem; font-weight: 600; color: #111827; background: {};",
                        tint(style.fill_color, 0.35),
                    )}>
                        {style.label}
                        {score.map(|s| format!(" · {s}점"))}
                    </span>
                </div>
            </div>
            {(!rows.is_empty()).then(|| view! {
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 4px 12px;">
                    {rows.into_iter().map(|(label, value)| view! {
                        <div style="display: flex; justify-content: space-between; font-size: 0.8rem; color: #4b5563;">
                            <span>{label}</span>
                            <span style="font-weight: 600; color: #111827;">{value}</span>
                        </div>
                    }).collect_view()}
                </div>
            })}
            {show_description.then(|| view! {
                <p style="margin-top: 8px; font-size: 0.8rem; color: #374151;">"📸 " {style.description}</p>
            })}
            {measured.map(|m| view! {
                <p style="margin-top: 6px; font-size: 0.7rem; color: #9ca3af;">"측정시각: " {m}</p>
            })}
        </div>
    }
}
