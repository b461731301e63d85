use super::api::upload_files;
use super::staging::FileKey;
use super::state::create_state;
use super::thumbnail::{read_preview, Preview};
use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;
use crate::shared::notify::{navigate_to, notify};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{DragEvent, FileList};

/// Страница загрузки: выбор/перетаскивание файлов, превью, отправка
#[component]
pub fn UploadInvoices() -> impl IntoView {
    let config = StoredValue::new(use_context::<ClientConfig>().unwrap_or_default().upload);
    let state = create_state();
    let file_input = NodeRef::<html::Input>::new();

    let add_files = move |files: FileList| {
        let candidates = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|file| (FileKey::of(&file), file))
            .collect::<Vec<_>>();

        let Some(added) = state.try_update(|s| s.add_files(candidates)) else {
            return;
        };
        log::debug!("Staged {} new file(s)", added.len());

        for (key, file) in added {
            spawn_local(async move {
                let preview = read_preview(&file).await;
                state.try_update(|s| s.set_preview(key, preview));
            });
        }
    };

    let reset_input = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let on_change = move |_| {
        if let Some(files) = file_input.get_untracked().and_then(|input| input.files()) {
            add_files(files);
        }
        reset_input();
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            add_files(files);
        }
        reset_input();
    };

    let on_browse = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_upload = move |_| {
        let files = match state.try_update(|s| s.begin_submit()) {
            Some(Ok(files)) => files,
            Some(Err(e)) => {
                notify(e.user_message());
                return;
            }
            None => return,
        };
        let config = config.get_value();
        log::info!("Uploading {} file(s) to {}", files.len(), config.endpoint);

        spawn_local(async move {
            match upload_files(&config, &files).await {
                Ok(response) => {
                    log::info!("Upload finished: {}", response.summary());
                    state.try_update(|s| s.finish_submit(true));
                    notify("Files uploaded successfully!");
                    navigate_to(&config.results_path);
                }
                Err(e) => {
                    if e.is_exception() {
                        log::error!("Upload failed: {}", e);
                    } else {
                        log::warn!("Upload rejected: {}", e);
                    }
                    state.try_update(|s| s.finish_submit(false));
                    notify(e.user_message());
                }
            }
        });
    };

    let render_thumbnail = move |(key, preview): (FileKey, Preview)| {
        let title = key.name.clone();
        let image = match preview {
            Preview::Image(src) => view! {
                <img src=src alt=title.clone() style="width: 100%; height: 100%; object-fit: cover;" />
            }
            .into_any(),
            Preview::Unavailable => view! {
                <div class="file-placeholder" style="display: flex; align-items: center; justify-content: center; height: 100%; color: #888;">
                    {icon("upload")}
                </div>
            }
            .into_any(),
        };

        view! {
            <div class="file-thumbnail" title=title style="position: relative; width: 120px; height: 120px; border: 1px solid #ddd; border-radius: 6px; overflow: hidden;">
                {image}
                <button
                    class="file-thumbnail__remove"
                    style="position: absolute; top: 4px; right: 4px; border: none; border-radius: 50%; width: 22px; height: 22px; cursor: pointer; background: rgba(0,0,0,0.6); color: #fff;"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        state.try_update(|s| s.remove_file(&key));
                    }
                >
                    "×"
                </button>
            </div>
        }
    };

    view! {
        <div class="upload-page" style="max-width: 900px; margin: 0 auto; padding: 24px;">
            <h2>"Upload Invoices"</h2>

            <div
                id="container"
                class="upload-dropzone"
                style="border: 2px dashed #bbb; border-radius: 8px; padding: 24px; min-height: 180px; cursor: pointer;"
                on:dragover=on_dragover
                on:drop=on_drop
                on:click=on_browse
            >
                <input
                    id="file-input"
                    type="file"
                    multiple=true
                    style="display: none;"
                    node_ref=file_input
                    on:change=on_change
                    on:click=|ev| ev.stop_propagation()
                />

                <Show when=move || state.with(|s| s.is_empty())>
                    <p id="no-files-message" style="text-align: center; color: #888;">
                        "Drag and drop files here or click to select"
                    </p>
                </Show>

                <div id="uploaded-files" style="display: flex; flex-wrap: wrap; gap: 12px;">
                    <For
                        each=move || state.with(|s| s.thumbnails())
                        key=|(key, _)| key.clone()
                        children=render_thumbnail
                    />
                </div>
            </div>

            <div style="margin-top: 16px; display: flex; gap: 12px; align-items: center;">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.with(|s| s.is_uploading))
                    on_click=on_upload
                >
                    "Upload"
                </Button>
                <span style="color: #666;">
                    {move || state.with(|s| format!("{} file(s) selected", s.staged.len()))}
                </span>
            </div>
        </div>
    }
}
