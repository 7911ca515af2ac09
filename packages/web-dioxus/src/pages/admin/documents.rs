//! Admin document management: list, create, edit, delete.

use dioxus::prelude::*;
use portal_client::Document;

use crate::auth::server_error_message;
use crate::format::{format_date, truncate};

/// Admin documents list page
#[component]
pub fn AdminDocuments() -> Element {
    let mut documents = use_server_future(fetch_admin_documents)?;

    // Shared form: empty for create, populated when editing.
    let mut editing = use_signal(|| None::<i64>);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut drive_link = use_signal(String::new);
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let mut clear_form = move || {
        editing.set(None);
        title.set(String::new());
        description.set(String::new());
        drive_link.set(String::new());
        error.set(None);
    };

    let handle_submit = move |_| {
        let title_value = title().trim().to_string();
        let link_value = drive_link().trim().to_string();
        if title_value.is_empty() || link_value.is_empty() {
            error.set(Some("Title and Google Drive link are required".to_string()));
            return;
        }
        if pending() {
            return;
        }
        pending.set(true);
        error.set(None);

        let description_value = description().trim().to_string();
        let editing_id = editing();
        spawn(async move {
            let result = match editing_id {
                Some(id) => edit_document(id, title_value, description_value, link_value).await,
                None => add_document(title_value, description_value, link_value).await,
            };
            match result {
                Ok(()) => {
                    clear_form();
                    documents.restart();
                }
                Err(err) => error.set(Some(server_error_message(&err))),
            }
            pending.set(false);
        });
    };

    let handle_edit = move |doc: Document| {
        editing.set(Some(doc.id));
        title.set(doc.title);
        description.set(doc.description.unwrap_or_default());
        drive_link.set(doc.google_drive_link);
        error.set(None);
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match remove_document(id).await {
                Ok(()) => {
                    if editing() == Some(id) {
                        clear_form();
                    }
                    documents.restart();
                }
                Err(err) => error.set(Some(server_error_message(&err))),
            }
        });
    };

    let is_editing = editing().is_some();
    let form_title = if is_editing { "Edit Document" } else { "Add Document" };
    let submit_label = if is_editing { "Save Changes" } else { "Add Document" };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Documents" }

            // Create / edit form
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "{form_title}" }

                if let Some(message) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg mb-4 text-sm",
                        "{message}"
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-4 mb-4",
                    div {
                        label { class: "block text-sm text-gray-600 mb-1", "Title" }
                        input {
                            r#type: "text",
                            class: "border border-gray-300 rounded-lg px-3 py-2 w-full",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-sm text-gray-600 mb-1", "Google Drive Link" }
                        input {
                            r#type: "url",
                            class: "border border-gray-300 rounded-lg px-3 py-2 w-full",
                            placeholder: "https://drive.google.com/...",
                            value: "{drive_link}",
                            oninput: move |evt| drive_link.set(evt.value()),
                        }
                    }
                    div {
                        class: "md:col-span-2",
                        label { class: "block text-sm text-gray-600 mb-1", "Description" }
                        textarea {
                            class: "border border-gray-300 rounded-lg px-3 py-2 w-full",
                            rows: "2",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "flex items-center gap-3",
                    button {
                        class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50",
                        disabled: pending(),
                        onclick: handle_submit,
                        "{submit_label}"
                    }
                    if is_editing {
                        button {
                            class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200",
                            onclick: move |_| clear_form(),
                            "Cancel"
                        }
                    }
                }
            }

            match documents.value().as_ref().as_deref() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                tr {
                                    class: "text-left text-xs font-medium text-gray-500 uppercase",
                                    th { class: "px-4 py-3", "Title" }
                                    th { class: "px-4 py-3", "Description" }
                                    th { class: "px-4 py-3", "Added" }
                                    th { class: "px-4 py-3", "Actions" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for doc in list.iter() {
                                    DocumentRow {
                                        document: doc.clone(),
                                        on_edit: handle_edit,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No documents yet." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading documents: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DocumentRowProps {
    document: Document,
    on_edit: EventHandler<Document>,
    on_delete: EventHandler<i64>,
}

#[component]
fn DocumentRow(props: DocumentRowProps) -> Element {
    let doc = &props.document;
    let description = doc.description.as_deref().unwrap_or("");

    rsx! {
        tr {
            class: "hover:bg-gray-50 text-sm",
            td {
                class: "px-4 py-3 font-medium text-gray-900",
                a {
                    href: "{doc.google_drive_link}",
                    target: "_blank",
                    class: "text-blue-600 hover:text-blue-700",
                    {truncate(&doc.title, 60)}
                }
            }
            td { class: "px-4 py-3 text-gray-500", {truncate(description, 80)} }
            td { class: "px-4 py-3 text-gray-500", {format_date(doc.created_at)} }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-sm rounded hover:bg-gray-200",
                        onclick: {
                            let doc = props.document.clone();
                            move |_| props.on_edit.call(doc.clone())
                        },
                        "Edit"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: {
                            let id = doc.id;
                            move |_| props.on_delete.call(id)
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_admin_documents() -> Result<Vec<Document>, ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .list_documents(&token)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn add_document(
    title: String,
    description: String,
    google_drive_link: String,
) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    let input = portal_client::DocumentInput {
        title,
        description: Some(description).filter(|d| !d.is_empty()),
        google_drive_link,
    };
    crate::auth::portal()
        .create_document(&token, &input)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn edit_document(
    id: i64,
    title: String,
    description: String,
    google_drive_link: String,
) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    let input = portal_client::DocumentInput {
        title,
        description: Some(description).filter(|d| !d.is_empty()),
        google_drive_link,
    };
    crate::auth::portal()
        .update_document(&token, id, &input)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn remove_document(id: i64) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .delete_document(&token, id)
        .await
        .map_err(crate::auth::user_facing)
}
