//! User dashboard: searchable document list

use dioxus::prelude::*;

use portal_client::Document;

use crate::auth::use_user_auth;
use crate::format::{format_date, format_mobile_display, truncate};
use crate::routes::Route;

#[component]
pub fn UserDashboard() -> Element {
    let auth = use_user_auth();
    let navigator = use_navigator();

    let documents = use_server_future(fetch_user_documents)?;
    let mut search = use_signal(String::new);

    // Client-side title/description substring filter
    let filtered = use_memo(move || {
        let docs = match documents.value().as_ref().as_deref() {
            Some(Ok(docs)) => docs.clone(),
            _ => vec![],
        };

        let query = search().trim().to_lowercase();
        if query.is_empty() {
            return docs;
        }

        docs.into_iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(&query)
                    || doc
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
            })
            .collect::<Vec<_>>()
    });

    let handle_logout = move |_| {
        spawn(async move {
            auth.logout().await;
            navigator.push(Route::Home {});
        });
    };

    let mobile_label = auth
        .user
        .read()
        .as_ref()
        .map(|user| format_mobile_display(&user.mobile_number))
        .unwrap_or_else(|| "User".to_string());

    rsx! {
        div {
            // Header
            header {
                class: "bg-white border-b border-gray-200 px-6 py-4",
                div {
                    class: "flex items-center justify-between",
                    h1 { class: "text-xl font-bold text-gray-900", "Your Documents" }
                    div {
                        class: "flex items-center gap-4",
                        span { class: "text-sm text-gray-600", "{mobile_label}" }
                        button {
                            class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                            onclick: handle_logout,
                            "Logout"
                        }
                    }
                }
            }

            main {
                class: "p-6",

                // Search bar
                div {
                    class: "mb-6 max-w-md",
                    input {
                        r#type: "search",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                        placeholder: "Search documents...",
                        class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    }
                }

                match documents.value().as_ref().as_deref() {
                    Some(Ok(_)) if !filtered().is_empty() => rsx! {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                            for doc in filtered().iter() {
                                DocumentCard { document: doc.clone() }
                            }
                        }
                    },
                    Some(Ok(_)) => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                            p { class: "text-gray-500", "No documents found." }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Error: {e}"
                        }
                    },
                    None => rsx! {
                        div { class: "text-center py-12 text-gray-500", "Loading..." }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DocumentCardProps {
    document: Document,
}

#[component]
fn DocumentCard(props: DocumentCardProps) -> Element {
    let doc = &props.document;
    let added = format_date(doc.created_at);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-5 flex flex-col",
            div {
                class: "flex-1",
                Link {
                    to: Route::UserDocumentView { id: doc.id },
                    class: "text-base font-medium text-emerald-700 hover:text-emerald-800",
                    {truncate(&doc.title, 50)}
                }
                p { class: "text-xs text-gray-400 mt-1", "Added {added}" }
                if let Some(description) = &doc.description {
                    p {
                        class: "text-sm text-gray-600 mt-2",
                        {truncate(description, 120)}
                    }
                }
            }
            div {
                class: "mt-4",
                a {
                    href: "{doc.google_drive_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "text-sm text-emerald-600 hover:text-emerald-700 font-medium",
                    "Open document"
                }
            }
        }
    }
}

#[server]
async fn fetch_user_documents() -> Result<Vec<Document>, ServerFnError> {
    let token = crate::auth::require_user_token().await?;
    crate::auth::portal()
        .user_documents(&token)
        .await
        .map_err(crate::auth::user_facing)
}
