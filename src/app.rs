use leptos::prelude::*;
use web_sys::File;

use crate::config::{FormConfig, Locale, PREVIEW_WIDTH_PX, preview_height_px};
use crate::dom::{FileInputWriteBack, file_list_to_vec};
use crate::hint::hint_text;
use crate::preview::{PreviewConfig, apply_geometry};
use crate::selection::{FileOrder, ListOp, OrderWriteBack, Outcome};
use crate::sync::PairedControl;
use crate::thumbnail::{ThumbAction, thumbnail_view};

/// Locale from `<html lang>`, English when absent.
pub fn document_locale() -> Locale {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute("lang"))
        .map(|tag| Locale::from_lang_tag(&tag))
        .unwrap_or_default()
}

fn log_outcome(outcome: &Outcome) {
    if outcome.degraded
        && let Some(Err(err)) = &outcome.write_back
    {
        gloo::console::warn!("file order: write-back unsupported", err.to_string());
    }
}

#[component]
pub fn App(config: FormConfig) -> impl IntoView {
    let locale = config.locale;

    let file_ref = NodeRef::<leptos::html::Input>::new();
    let page_inner_ref = NodeRef::<leptos::html::Div>::new();
    let gutter_ref = NodeRef::<leptos::html::Div>::new();

    let order = RwSignal::new_local(FileOrder::<File>::default());

    // The numeric fields are authoritative on load; sliders follow them.
    let margin = PairedControl::new(config.margin, config.margin_slider);
    let gutter = PairedControl::new(config.gutter, config.gutter_slider);
    let dpi = RwSignal::new(config.dpi.to_string());

    let geometry = Memo::new(move |_| {
        PreviewConfig::from_fields(&margin.text(), &gutter.text(), &dpi.get()).geometry()
    });

    // preview effect
    Effect::new(move |_| {
        let g = geometry.get();
        let page_inner = page_inner_ref.get();
        let gutter_el = gutter_ref.get();
        apply_geometry(&g, page_inner.as_deref(), gutter_el.as_deref());
    });

    let mutate = move |op: ListOp<File>| {
        let input = file_ref.get();
        let sink = input.as_ref().map(FileInputWriteBack::new);
        let sink = sink.as_ref().map(|w| w as &dyn OrderWriteBack<File>);
        let mut outcome = Outcome::default();
        // Boundary no-ops leave the list untouched; don't rebuild rows for them.
        order.maybe_update(|s| {
            outcome = s.apply(op, sink);
            outcome.changed
        });
        log_outcome(&outcome);
    };

    let dispatch = move |action: ThumbAction| match action {
        ThumbAction::MoveUp(idx) => mutate(ListOp::MoveUp(idx)),
        ThumbAction::MoveDown(idx) => mutate(ListOp::MoveDown(idx)),
        ThumbAction::Remove(idx) => mutate(ListOp::Remove(idx)),
    };

    // file input onchange
    let on_files = move |_| {
        let Some(input) = file_ref.get() else { return };
        let files = input
            .files()
            .map(|files| file_list_to_vec(&files))
            .unwrap_or_default();
        gloo::console::log!("files selected", files.len() as u32);
        mutate(ListOp::Select(files));
    };

    let on_clear = move |_| mutate(ListOp::ClearAll);

    let hint = Memo::new(move |_| order.with(|s| hint_text(&s.files(), locale)));
    let warn = Memo::new(move |_| order.with(|s| s.warning_visible()));

    let page_style = format!(
        "width:{}px;height:{}px;",
        PREVIEW_WIDTH_PX,
        preview_height_px()
    );

    view! {
        <form
            id="upload-form"
            class="main"
            method="post"
            action=config.upload_endpoint
            enctype="multipart/form-data"
        >
            <section class="files">
                <input node_ref=file_ref id="file" name="file" type="file" accept="image/*" multiple
                    on:change=on_files
                />
                <div id="file-hint" class="hint">{move || hint.get()}</div>
                <div id="order-warning" class="warn" class:hidden=move || !warn.get()>
                    {locale.order_warning()}
                </div>
                <button id="clear-all" type="button" on:click=on_clear>
                    {locale.clear_all_label()}
                </button>
                <div id="thumb-list" class="thumb-list">
                    // Rows are keyed by entry id and badge, so a reorder only
                    // rebuilds the rows that moved.
                    <For
                        each=move || order.with(|s| s.rows())
                        key=|row| *row
                        children=move |row| {
                            order
                                .with_untracked(|s| s.file_by_id(row.id).cloned())
                                .map(|file| thumbnail_view(row, file, locale, dispatch))
                        }
                    />
                </div>
            </section>

            <section class="settings">
                <label>
                    <span class="panel-label">"DPI"</span>
                    <input id="dpi" name="dpi" type="text" inputmode="numeric"
                        prop:value=move || dpi.get()
                        on:input=move |ev| dpi.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    <span class="panel-label">"Margin"</span>
                    <input id="margin" name="margin" type="text" inputmode="numeric"
                        prop:value=move || margin.text()
                        on:input=move |ev| margin.on_number_input(event_target_value(&ev))
                    />
                    <input id="margin-range" type="range"
                        min=margin.bounds().min.to_string()
                        max=margin.bounds().max.to_string()
                        step="1"
                        prop:value=move || margin.slider_value()
                        on:input=move |ev| margin.on_slider_input(event_target_value(&ev))
                    />
                </label>

                <label>
                    <span class="panel-label">"Gutter"</span>
                    <input id="gutter" name="gutter" type="text" inputmode="numeric"
                        prop:value=move || gutter.text()
                        on:input=move |ev| gutter.on_number_input(event_target_value(&ev))
                    />
                    <input id="gutter-range" type="range"
                        min=gutter.bounds().min.to_string()
                        max=gutter.bounds().max.to_string()
                        step="1"
                        prop:value=move || gutter.slider_value()
                        on:input=move |ev| gutter.on_slider_input(event_target_value(&ev))
                    />
                </label>

                <label>
                    <input type="checkbox" name="fast" value="true" checked=true />
                    <span>"Fast"</span>
                </label>

                <button type="submit">"Upload"</button>
            </section>

            <section class="preview">
                <div id="page-preview" class="page" style=page_style>
                    <div node_ref=page_inner_ref id="page-inner" class="page-inner">
                        <div class="column"></div>
                        <div node_ref=gutter_ref id="gutter-el" class="gutter"></div>
                        <div class="column"></div>
                    </div>
                </div>
                <div class="caption">
                    {move || locale.column_caption(geometry.get().css_column_px)}
                </div>
            </section>
        </form>
    }
}
