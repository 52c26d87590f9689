//! Account menu: resolves the current user after mount and renders either
//! the profile dropdown with notifications, or login and register prompts.

use icondata::{
    BsBag, BsBell, BsBoxArrowInRight, BsBoxArrowRight, BsChevronDown, BsGear, BsHeart, BsPerson,
    BsPersonPlus, BsSpeedometer2, BsX,
};
use leptos::{ev, html, logging, prelude::*, task::spawn_local};

use crate::{
    components::icons,
    config::use_config,
    dismiss::use_dismissible,
    session::{
        HttpAccountApi, LogoutGuard, NOTIFICATIONS, SessionStatus, SessionUser, guarded_logout,
        resolve_session, unread_count,
    },
    storage::use_client_state,
};

const MENU_LINK: &str = "flex items-center py-3 px-4 space-x-3 text-gray-700 transition-colors dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-750";

#[derive(Clone, Copy)]
struct MenuState {
    dropdown_open: RwSignal<bool>,
    notifications_open: RwSignal<bool>,
    is_logging_out: RwSignal<bool>,
    dropdown_ref: NodeRef<html::Div>,
    notification_ref: NodeRef<html::Div>,
    logout: Callback<()>,
}

pub fn component() -> impl IntoView {
    let client = use_client_state();
    let config = use_config();
    let status = RwSignal::new(SessionStatus::Loading);

    {
        let client = client.clone();
        let config = config.clone();
        Effect::new(move || {
            let client = client.clone();
            let api = HttpAccountApi::from_config(&config);
            spawn_local(async move {
                let resolved = resolve_session(&client, &api).await;
                status.try_set(resolved);
            });
        });
    }

    let dropdown_open = RwSignal::new(false);
    let notifications_open = RwSignal::new(false);
    let is_logging_out = RwSignal::new(false);

    let guard = LogoutGuard::default();
    let logout = Callback::new(move |()| {
        is_logging_out.set(true);
        let client = client.clone();
        let guard = guard.clone();
        let api = HttpAccountApi::from_config(&config);
        spawn_local(async move {
            let Some(outcome) = guarded_logout(&guard, &client, &api).await else {
                return;
            };
            status.try_set(outcome.status);
            dropdown_open.try_set(false);
            if let Err(err) = window().location().assign(outcome.redirect) {
                logging::error!("Failed to leave the session page: {err:?}");
            }
            is_logging_out.try_set(false);
        });
    });

    let menu = MenuState {
        dropdown_open,
        notifications_open,
        is_logging_out,
        dropdown_ref: NodeRef::new(),
        notification_ref: NodeRef::new(),
        logout,
    };
    use_dismissible(menu.dropdown_ref, move || dropdown_open.set(false));
    use_dismissible(menu.notification_ref, move || notifications_open.set(false));

    move || match status.get() {
        SessionStatus::Loading => loading().into_any(),
        SessionStatus::Authenticated(user) => authenticated(user, menu).into_any(),
        SessionStatus::Anonymous => anonymous().into_any(),
    }
}

fn loading() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2" aria-busy="true">
            <div class="w-8 h-8 bg-gray-200 rounded-full animate-pulse dark:bg-gray-700"></div>
            <div class="hidden md:block">
                <div class="w-24 h-4 bg-gray-200 rounded animate-pulse dark:bg-gray-700"></div>
            </div>
        </div>
    }
}

fn avatar(user: &SessionUser, size: &'static str, text: &'static str) -> impl IntoView + use<> {
    match user.profile_image.clone() {
        Some(src) => view! {
            <img
                src=src
                alt=user.name.clone()
                class=format!("{size} rounded-full object-cover border-2 border-white dark:border-gray-800 shadow")
            />
        }
        .into_any(),
        None => view! {
            <div class=format!(
                "{size} rounded-full bg-gradient-to-r from-purple-600 to-pink-600 flex items-center justify-center text-white font-bold {text} shadow",
            )>{user.initials()}</div>
        }
        .into_any(),
    }
}

fn notifications(menu: MenuState) -> impl IntoView {
    let unread = unread_count(&NOTIFICATIONS);
    let close = move |_: ev::MouseEvent| menu.notifications_open.set(false);

    let panel = move || {
        menu.notifications_open.get().then(|| {
            let items = NOTIFICATIONS
                .iter()
                .map(|notification| {
                    let highlight = if notification.read { "" } else { "bg-blue-50 dark:bg-blue-900/20" };
                    view! {
                        <div class=format!(
                            "p-4 border-b border-gray-100 dark:border-gray-700 hover:bg-gray-50 dark:hover:bg-gray-750 cursor-pointer transition-colors {highlight}",
                        )>
                            <p class="text-gray-800 dark:text-white">{notification.text}</p>
                            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">{notification.time}</p>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="overflow-hidden absolute right-0 z-50 mt-2 w-80 bg-white rounded-xl border border-gray-200 shadow-2xl dark:bg-gray-800 dark:border-gray-700">
                    <div class="p-4 border-b border-gray-200 dark:border-gray-700">
                        <div class="flex justify-between items-center">
                            <h3 class="font-bold text-gray-800 dark:text-white">"Notifications"</h3>
                            <button
                                on:click=close
                                class="text-gray-500 dark:text-gray-400 hover:text-gray-700 dark:hover:text-white"
                                aria-label="Close notifications"
                            >
                                {icons::component(BsX, "size-5")}
                            </button>
                        </div>
                    </div>
                    <div class="overflow-y-auto max-h-96">{items}</div>
                    <div class="p-3 border-t border-gray-200 dark:border-gray-700">
                        <a
                            href="/notifications"
                            on:click=close
                            class="block font-medium text-center text-purple-600 dark:text-purple-400 hover:text-purple-700 dark:hover:text-purple-300"
                        >
                            "View all notifications"
                        </a>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="relative" node_ref=menu.notification_ref>
            <button
                on:click=move |_| menu.notifications_open.update(|open| *open = !*open)
                class="relative p-2 rounded-full transition-colors duration-200 dark:hover:bg-gray-800 hover:bg-gray-100 group"
                aria-label="Notifications"
                aria-expanded=move || menu.notifications_open.get().to_string()
            >
                {icons::component(
                    BsBell,
                    "size-5 text-gray-600 dark:text-gray-300 group-hover:text-purple-600 dark:group-hover:text-purple-400 transition-colors",
                )}
                {(unread > 0)
                    .then(|| {
                        view! {
                            <span class="flex absolute -top-1 -right-1 justify-center items-center w-5 h-5 text-xs text-white bg-red-500 rounded-full animate-pulse">
                                {unread}
                            </span>
                        }
                    })}
            </button>
            {panel}
        </div>
    }
}

fn menu_link(
    menu: MenuState,
    href: &'static str,
    icon: icondata::Icon,
    label: &'static str,
    badge: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <a href=href class=MENU_LINK on:click=move |_| menu.dropdown_open.set(false)>
            {icons::component(icon, "size-4 text-gray-500")}
            <span>{label}</span>
            {badge
                .map(|(count, colors)| {
                    view! {
                        <span class=format!("ml-auto text-xs px-2 py-1 rounded-full {colors}")>{count}</span>
                    }
                })}
        </a>
    }
}

fn dropdown(user: SessionUser, menu: MenuState) -> impl IntoView {
    let is_admin = user.is_admin();
    view! {
        <div class="overflow-hidden absolute right-0 z-50 mt-2 w-64 bg-white rounded-xl border border-gray-200 shadow-2xl dark:bg-gray-800 dark:border-gray-700">
            <div class="p-4 bg-gradient-to-r from-purple-50 to-pink-50 border-b border-gray-200 dark:border-gray-700 dark:from-purple-900/20 dark:to-pink-900/20">
                <div class="flex items-center space-x-3">
                    {avatar(&user, "w-12 h-12", "text-xl")}
                    <div>
                        <p class="font-bold text-gray-800 dark:text-white">{user.name.clone()}</p>
                        <p class="text-sm text-gray-600 dark:text-gray-300">{user.email.clone()}</p>
                        {user
                            .role
                            .clone()
                            .map(|role| {
                                view! {
                                    <span class="inline-block py-0.5 px-2 mt-1 text-xs text-purple-600 bg-purple-100 rounded-full dark:text-purple-300 dark:bg-purple-900/30">
                                        {role}
                                    </span>
                                }
                            })}
                    </div>
                </div>
            </div>

            <div class="py-2">
                {menu_link(menu, "/profile", BsPerson, "My Profile", None)}
                {is_admin.then(|| menu_link(menu, "/admin/dashboard", BsSpeedometer2, "Dashboard", None))}
                {menu_link(
                    menu,
                    "/orders",
                    BsBag,
                    "My Orders",
                    Some(("3", "bg-blue-100 dark:bg-blue-900 text-blue-600 dark:text-blue-300")),
                )}
                {menu_link(
                    menu,
                    "/wishlist",
                    BsHeart,
                    "Wishlist",
                    Some(("12", "bg-pink-100 dark:bg-pink-900 text-pink-600 dark:text-pink-300")),
                )}
                {menu_link(menu, "/settings", BsGear, "Settings", None)}
            </div>

            <div class="p-2 border-t border-gray-200 dark:border-gray-700">
                <button
                    on:click=move |_| menu.logout.run(())
                    disabled=move || menu.is_logging_out.get()
                    class="flex justify-center items-center py-3 px-4 space-x-2 w-full text-white bg-gradient-to-r from-red-500 to-pink-500 rounded-lg transition-all duration-200 hover:from-red-600 hover:to-pink-600 disabled:opacity-70 disabled:cursor-not-allowed"
                >
                    {move || {
                        if menu.is_logging_out.get() {
                            view! {
                                <div class="w-4 h-4 rounded-full border-2 border-white animate-spin border-t-transparent"></div>
                                <span>"Logging out..."</span>
                            }
                                .into_any()
                        } else {
                            view! {
                                {icons::component(BsBoxArrowRight, "size-4")}
                                <span>"Logout"</span>
                            }
                                .into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

fn authenticated(user: SessionUser, menu: MenuState) -> impl IntoView {
    let first_name = user.first_name().to_owned();
    let email = user.email.clone();
    let dropdown_user = user.clone();

    view! {
        <div class="flex relative items-center space-x-4">
            {notifications(menu)}
            <div class="relative" node_ref=menu.dropdown_ref>
                <button
                    on:click=move |_| menu.dropdown_open.update(|open| *open = !*open)
                    class="flex items-center p-2 space-x-3 rounded-xl transition-all duration-200 dark:hover:bg-gray-800 hover:bg-gray-100 group"
                    aria-label="User menu"
                    aria-expanded=move || menu.dropdown_open.get().to_string()
                >
                    <div class="relative">
                        {avatar(&user, "w-10 h-10", "text-lg")}
                        <div class="absolute right-0 bottom-0 w-3 h-3 bg-emerald-500 rounded-full border-2 border-white dark:border-gray-800"></div>
                    </div>
                    <div class="hidden text-left md:block">
                        <p class="font-semibold text-gray-800 transition-colors dark:text-white group-hover:text-purple-600 dark:group-hover:text-purple-400">
                            {first_name}
                        </p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">{email}</p>
                    </div>
                    <span class=move || {
                        if menu.dropdown_open.get() {
                            "text-gray-500 transition-transform duration-200 rotate-180"
                        } else {
                            "text-gray-500 transition-transform duration-200"
                        }
                    }>{icons::component(BsChevronDown, "size-4")}</span>
                </button>
                {move || menu.dropdown_open.get().then(|| dropdown(dropdown_user.clone(), menu))}
            </div>
        </div>
    }
}

fn anonymous() -> impl IntoView {
    view! {
        <div class="flex relative items-center space-x-4">
            <div class="flex items-center space-x-4">
                <div class="hidden items-center space-x-3 md:flex">
                    <a
                        href="/login"
                        class="flex items-center py-2.5 px-5 space-x-2 text-white bg-gradient-to-r from-purple-600 to-pink-600 rounded-full shadow-lg transition-all duration-200 transform hover:from-purple-700 hover:to-pink-700 hover:shadow-xl hover:-translate-y-0.5"
                    >
                        {icons::component(BsBoxArrowInRight, "size-4")}
                        <span class="font-semibold">"Login"</span>
                    </a>
                    <a
                        href="/register"
                        class="flex items-center py-2.5 px-5 space-x-2 text-white bg-gradient-to-r from-blue-600 to-cyan-600 rounded-full shadow-lg transition-all duration-200 transform hover:from-blue-700 hover:to-cyan-700 hover:shadow-xl hover:-translate-y-0.5"
                    >
                        {icons::component(BsPersonPlus, "size-4")}
                        <span class="font-semibold">"Register"</span>
                    </a>
                </div>
                <div class="flex items-center space-x-2 md:hidden">
                    <a
                        href="/login"
                        class="p-3 text-white bg-gradient-to-r from-purple-600 to-pink-600 rounded-full shadow-lg transition-all duration-200 hover:from-purple-700 hover:to-pink-700"
                        aria-label="Login"
                    >
                        {icons::component(BsBoxArrowInRight, "size-4")}
                    </a>
                </div>
            </div>
            <div class="hidden text-sm italic text-gray-600 animate-pulse lg:block dark:text-gray-400">
                "Welcome! Please sign in for personalized experience"
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_signature() {
        let _component: fn() -> _ = component;
    }

    #[test]
    fn badge_shows_unread_notifications() {
        assert_eq!(unread_count(&NOTIFICATIONS), 2);
    }
}
