//! Single-document detail page

use dioxus::prelude::*;

use portal_client::Document;

use crate::format::format_timestamp;
use crate::routes::Route;

#[component]
pub fn UserDocumentView(id: i64) -> Element {
    let navigator = use_navigator();
    let document = use_server_future(move || fetch_user_document(id))?;

    rsx! {
        div {
            class: "p-6 max-w-2xl mx-auto",

            match document.value().as_ref().as_deref() {
                Some(Ok(doc)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h1 { class: "text-2xl font-bold text-gray-900 mb-2", "{doc.title}" }

                        div {
                            class: "text-sm text-gray-500 mb-4",
                            p { "Added " {format_timestamp(doc.created_at)} }
                            if doc.updated_at.is_some() && doc.updated_at != doc.created_at {
                                p { "Updated " {format_timestamp(doc.updated_at)} }
                            }
                            if let Some(file_id) = &doc.file_id {
                                p { class: "font-mono text-xs mt-1", "File ID: {file_id}" }
                            }
                        }

                        if let Some(description) = &doc.description {
                            p { class: "text-gray-700 mb-6", "{description}" }
                        }

                        div {
                            class: "flex items-center gap-4",
                            a {
                                href: "{doc.google_drive_link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700",
                                "Open Document"
                            }
                            Link {
                                to: Route::UserDashboard {},
                                class: "text-sm text-gray-500 hover:text-gray-700",
                                "Back to Dashboard"
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-6 rounded-lg text-center",
                        h2 { class: "text-lg font-semibold mb-2", "Error Loading Document" }
                        p { class: "mb-4", "{e}" }
                        button {
                            class: "bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700",
                            onclick: move |_| {
                                navigator.push(Route::UserDashboard {});
                            },
                            "Back to Dashboard"
                        }
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12 text-gray-500", "Loading document..." }
                }
            }
        }
    }
}

#[server]
async fn fetch_user_document(id: i64) -> Result<Document, ServerFnError> {
    let token = crate::auth::require_user_token().await?;
    crate::auth::portal()
        .user_document(&token, id)
        .await
        .map_err(crate::auth::user_facing)
}
