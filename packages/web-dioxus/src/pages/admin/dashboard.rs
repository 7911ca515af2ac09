//! Admin dashboard page

use dioxus::prelude::*;

use crate::routes::Route;

/// Admin dashboard with stats overview
#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_server_future(fetch_admin_stats)?;

    let stats_value = match stats.value().as_ref().as_deref() {
        Some(Ok(s)) => s.clone(),
        _ => AdminStats::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            // Stats Grid
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",

                StatCard {
                    title: "Total Users",
                    value: stats_value.total_users,
                    icon: "\u{1F465}",
                    color: "blue"
                }
                StatCard {
                    title: "Verified Users",
                    value: stats_value.verified_users,
                    icon: "\u{2705}",
                    color: "green"
                }
                StatCard {
                    title: "Documents",
                    value: stats_value.total_documents,
                    icon: "\u{1F4C4}",
                    color: "amber"
                }
            }

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::AdminUsers {},
                        label: "Manage Users",
                        icon: "\u{1F465}"
                    }
                    QuickActionLink {
                        to: Route::AdminDocuments {},
                        label: "Manage Documents",
                        icon: "\u{1F4C4}"
                    }
                }
            }
        }
    }
}

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AdminStats {
    total_users: i32,
    verified_users: i32,
    total_documents: i32,
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: i32,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "blue" => "bg-blue-50",
        "green" => "bg-green-50",
        "amber" => "bg-amber-50",
        _ => "bg-gray-50",
    };

    let text_class = match props.color {
        "blue" => "text-blue-700",
        "green" => "text-green-700",
        "amber" => "text-amber-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}

#[server]
async fn fetch_admin_stats() -> Result<AdminStats, ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    let client = crate::auth::portal();

    let users = client
        .list_users(&token)
        .await
        .map_err(crate::auth::user_facing)?;
    let documents = client
        .list_documents(&token)
        .await
        .map_err(crate::auth::user_facing)?;

    Ok(AdminStats {
        total_users: users.len() as i32,
        verified_users: users.iter().filter(|u| u.is_verified).count() as i32,
        total_documents: documents.len() as i32,
    })
}
