use crate::components::trend_chart::TrendChart;
use crate::physics::{fit_csv, TimeAxis, MAX_ROWS};
use crate::storage::format_rate;
use leptos::*;
use std::cell::Cell;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// Built-in series for trying the chart without a file: +0.18 per decade
/// with a small alternating wobble.
pub(crate) fn sample_csv() -> String {
    let mut csv = String::from("year,temperature\n");
    for (i, year) in (1980..=2020).enumerate() {
        let wobble = if i % 2 == 0 { 0.05 } else { -0.05 };
        let temp = 14.0 + 0.018 * (year - 1980) as f64 + wobble;
        csv.push_str(&format!("{},{:.3}\n", year, temp));
    }
    csv
}

/// Counts input changes so a slow file read cannot overwrite newer input.
#[derive(Debug, Default)]
pub(crate) struct UploadGeneration(Cell<u64>);

impl UploadGeneration {
    /// Start a new input and return its ticket.
    pub fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

async fn read_file(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("{:?}", e))?;
    text.as_string().ok_or_else(|| "file contents are not text".to_string())
}

/// Upload a time/temperature CSV and show its linear trend.
///
/// The uploaded text lives only in this component's signals.
#[component]
pub fn TrendPanel() -> impl IntoView {
    let (csv_text, set_csv_text) = create_signal(None::<String>);
    let (file_name, set_file_name) = create_signal(None::<String>);
    let (read_error, set_read_error) = create_signal(None::<String>);

    let report = create_memo(move |_| csv_text.with(|text| text.as_deref().map(fit_csv)));

    // Bumped by every upload, sample load and clear; a read that finishes
    // after the counter has moved on is dropped.
    let generation = store_value(UploadGeneration::default());

    let on_upload = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let ticket = generation.with_value(|g| g.advance());
        set_file_name.set(Some(file.name()));
        spawn_local(async move {
            let result = read_file(file).await;
            let current = generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("discarding superseded upload");
                return;
            }
            match result {
                Ok(text) => {
                    set_read_error.set(None);
                    set_csv_text.set(Some(text));
                }
                Err(e) => {
                    log::warn!("failed to read upload: {}", e);
                    set_read_error.set(Some(format!("Could not read the file: {}", e)));
                    set_csv_text.set(None);
                }
            }
        });
    };

    let load_sample = move |_| {
        generation.with_value(|g| g.advance());
        set_file_name.set(Some("sample data".to_string()));
        set_read_error.set(None);
        set_csv_text.set(Some(sample_csv()));
    };

    let clear = move |_| {
        generation.with_value(|g| g.advance());
        set_file_name.set(None);
        set_read_error.set(None);
        set_csv_text.set(None);
    };

    view! {
        <div class="panel trend-panel">
            <div class="controls">
                <div class="control-group">
                    <label for="csv-upload">"Temperature data (CSV)"</label>
                    <input type="file" id="csv-upload" accept=".csv,text/csv" on:change=on_upload/>
                    <p class="control-hint">
                        {format!(
                            "Two columns with a header row: a date or year, then a temperature. Up to {} rows.",
                            MAX_ROWS
                        )}
                    </p>
                </div>
                <div class="control-row">
                    <button class="secondary-button" on:click=load_sample>"Use sample data"</button>
                    <button class="reset-button" on:click=clear>"Clear"</button>
                </div>
                {move || file_name.get().map(|name| view! { <p class="file-name">"Loaded: " {name}</p> })}
            </div>

            {move || read_error.get().map(|msg| view! { <div class="error-message">{msg}</div> })}

            {move || match report.get() {
                None => view! {
                    <p class="panel-note">"Upload a file or use the sample data to see a trend."</p>
                }
                .into_view(),
                Some(Err(e)) => view! {
                    <div class="error-message">{e.to_string()}</div>
                }
                .into_view(),
                Some(Ok(report)) => {
                    let fit = report.fit.clone();
                    let axis = match report.series.time_axis {
                        TimeAxis::Calendar => "calendar dates",
                        TimeAxis::Numeric => "numeric time values",
                    };
                    view! {
                        <div class="trend-summary">
                            <p class="trend-rate">{format_rate(fit.slope_per_decade)}</p>
                            <p class="trend-details">
                                {format!(
                                    "R² = {:.3} · {} rows used, {} excluded · read as {}",
                                    fit.r_squared, fit.used, fit.excluded, axis
                                )}
                            </p>
                        </div>
                        <TrendChart report=report/>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
