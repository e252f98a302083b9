//! Document upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whichever of the drop area, title form, progress bar or result
//! card the `UploadState` phase calls for. The selected `File` itself stays
//! in the hidden file input; state only tracks its name.

use leptos::prelude::*;

use crate::app::PageContext;
use crate::state::upload::{UploadResult, UploadState};

fn display(shown: bool) -> &'static str {
    if shown { "block" } else { "none" }
}

#[component]
pub fn UploadPanel(ctx: PageContext) -> impl IntoView {
    let upload = ctx.upload;
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Clear the input whenever the panel returns to idle, so choosing the same
    // file again still fires `change`.
    Effect::new(move || {
        let idle = upload.with(UploadState::shows_drop_area);

        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get()
                && idle
            {
                input.set_value("");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = idle;
        }
    });

    let on_browse = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get_untracked() {
                input.click();
            }
        }
    };

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            if let Some(file) = file_input.get_untracked().and_then(|i| i.files()).and_then(|f| f.get(0)) {
                upload.update(|u| u.select_file(&file.name()));
            }
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        if !upload.with_untracked(|u| u.drag_over) {
            upload.update(|u| u.drag_over = true);
        }
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_over = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|u| u.drag_over = false);

        #[cfg(feature = "csr")]
        {
            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            let Some(file) = files.get(0) else {
                return;
            };
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            input.set_files(Some(&files));
            upload.update(|u| u.select_file(&file.name()));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        crate::actions::process_upload(
            ctx,
            file_input.get_untracked().and_then(|i| i.files()).and_then(|f| f.get(0)),
        );
    };

    let reset = move |_| upload.update(UploadState::reset);
    let result_field = move |read: fn(&UploadResult) -> String| {
        move || upload.with(|u| u.result().map(read).unwrap_or_default())
    };

    view! {
        <div class="upload-panel">
            <div
                id="uploadArea"
                class="upload-area"
                class:dragover=move || upload.with(|u| u.drag_over)
                style:display=move || display(upload.with(UploadState::shows_drop_area))
                on:click=on_browse
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <i class="fas fa-cloud-upload-alt"></i>
                <p>"Drag and drop a PDF or text file here, or click to browse"</p>
            </div>
            <input
                id="fileInput"
                type="file"
                accept=".pdf,.txt"
                style="display: none"
                node_ref=file_input
                on:change=on_file_change
            />

            <form
                id="uploadForm"
                class="upload-form"
                style:display=move || display(upload.with(UploadState::shows_form))
                on:submit=on_submit
            >
                <p class="selected-file">
                    <i class="fas fa-file"></i>
                    " "
                    <span id="fileName">{move || upload.with(|u| u.file_name.clone())}</span>
                </p>
                <label for="documentTitle">"Document title"</label>
                <input
                    id="documentTitle"
                    type="text"
                    placeholder="Leave blank to use the file name"
                    prop:value=move || upload.with(|u| u.title.clone())
                    on:input=move |ev| upload.update(|u| u.title = event_target_value(&ev))
                />
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">
                        "Upload & Analyze"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=reset>
                        "Cancel"
                    </button>
                </div>
            </form>

            <div
                id="uploadProgress"
                class="upload-progress"
                style:display=move || display(upload.with(UploadState::shows_progress))
            >
                <div class="progress-bar">
                    <div id="progressFill" class="progress-fill" style:width=move || upload.with(|u| u.progress.css_width())></div>
                </div>
                <p id="progressText" class="progress-text">{move || upload.with(UploadState::status_text)}</p>
            </div>

            <div
                id="uploadResult"
                class="upload-result"
                style:display=move || display(upload.with(|u| u.result().is_some()))
            >
                <h3>
                    <i class="fas fa-check-circle"></i>
                    " Upload complete"
                </h3>
                <p>
                    <strong>"Title: "</strong>
                    <span id="resultTitle">{result_field(|r| r.title.clone())}</span>
                </p>
                <p>
                    <strong>"Genre: "</strong>
                    <span id="resultGenre" class="genre-tag">{result_field(|r| r.genre.clone())}</span>
                </p>
                <p>
                    <strong>"Summary: "</strong>
                    <span id="resultSummary">{result_field(|r| r.summary.clone())}</span>
                </p>
                <button type="button" class="btn btn-primary" on:click=reset>
                    "Upload Another"
                </button>
            </div>
        </div>
    }
}
