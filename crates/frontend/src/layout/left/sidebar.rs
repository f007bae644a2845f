//! Sidebar: screens grouped by area, only those the user may view.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, visible_screens};
use contracts::system::permissions::Screen;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<Screen>,
}

fn screen_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Sectors => "factory",
        Screen::Processes => "cog",
        Screen::SectorProcesses => "layers",
        Screen::Machines => "cog",
        Screen::Models => "package",
        Screen::Colors => "droplet",
        Screen::Units => "ruler",
        Screen::Formulas => "flask",
        Screen::Products => "package",
        Screen::Orders => "clipboard",
        Screen::Productions => "recycle",
        Screen::Users => "users",
        Screen::WorkGroups => "users",
        Screen::Permissions => "shield",
    }
}

const GROUPS: [(&str, &str, &str, &[Screen]); 4] = [
    (
        "plant",
        "Planta",
        "factory",
        &[Screen::Sectors, Screen::Processes, Screen::SectorProcesses, Screen::Machines],
    ),
    (
        "catalogs",
        "Catálogos",
        "database",
        &[Screen::Models, Screen::Colors, Screen::Units, Screen::Formulas, Screen::Products],
    ),
    ("production", "Producción", "recycle", &[Screen::Orders, Screen::Productions]),
    ("system", "Sistema", "shield", &[Screen::Users, Screen::WorkGroups]),
];

/// Groups with at least one visible screen that has a page.
pub fn menu_groups(visible: &[Screen]) -> Vec<MenuGroup> {
    GROUPS
        .iter()
        .filter_map(|&(id, label, icon, screens)| {
            let items: Vec<Screen> = screens
                .iter()
                .copied()
                .filter(|s| s.has_page() && visible.contains(s))
                .collect();
            (!items.is_empty()).then_some(MenuGroup { id, label, icon, items })
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let (auth_state, _) = use_auth();

    // все группы раскрыты при входе
    let expanded_groups = RwSignal::new(GROUPS.iter().map(|g| g.0).collect::<Vec<&'static str>>());

    let groups = Memo::new(move |_| auth_state.with(|s| menu_groups(&visible_screens(s))));

    view! {
        <div class="app-sidebar__content">
            {move || groups.get().into_iter().map(|group| {
                let gid = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class=("app-sidebar__chevron--expanded", move || expanded_groups.with(|g| g.contains(&gid)))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&screen| {
                                    let key = screen.tab_key();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class=("app-sidebar__item--active", move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            })
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_screen(screen)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(screen_icon(screen))}
                                                <span>{screen.label()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_visible_screens() {
        let all = menu_groups(&Screen::ALL);
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|g| !g.items.contains(&Screen::Permissions)));

        let some = menu_groups(&[Screen::Colors, Screen::Productions, Screen::Permissions]);
        assert_eq!(
            some,
            vec![
                MenuGroup {
                    id: "catalogs",
                    label: "Catálogos",
                    icon: "database",
                    items: vec![Screen::Colors],
                },
                MenuGroup {
                    id: "production",
                    label: "Producción",
                    icon: "recycle",
                    items: vec![Screen::Productions],
                },
            ]
        );
        assert!(menu_groups(&[]).is_empty());
    }
}
