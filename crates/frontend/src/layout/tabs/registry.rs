//! tab.key → View. Every page is wrapped in [`RequireScreen`] so a tab left
//! open after a sector switch shows "sin acceso" instead of data.

use crate::domain::a001_sector::ui::list::SectorList;
use crate::domain::a002_process::ui::list::ProcessList;
use crate::domain::a003_sector_process::ui::list::SectorProcessList;
use crate::domain::a004_machine::ui::list::MachineList;
use crate::domain::a005_product_model::ui::list::ProductModelList;
use crate::domain::a006_color::ui::list::ColorList;
use crate::domain::a007_unit::ui::list::UnitList;
use crate::domain::a008_formula::ui::list::FormulaList;
use crate::domain::a009_product::ui::list::ProductList;
use crate::domain::a010_production_order::ui::list::ProductionOrderList;
use crate::domain::a011_production::ui::list::ProductionList;
use crate::system::auth::guard::RequireScreen;
use crate::system::users::ui::list::UserList;
use crate::system::work_groups::ui::list::WorkGroupList;
use contracts::system::permissions::Screen;
use leptos::logging::log;
use leptos::prelude::*;

fn screen_page(screen: Screen) -> AnyView {
    match screen {
        Screen::Sectors => view! { <SectorList /> }.into_any(),
        Screen::Processes => view! { <ProcessList /> }.into_any(),
        Screen::SectorProcesses => view! { <SectorProcessList /> }.into_any(),
        Screen::Machines => view! { <MachineList /> }.into_any(),
        Screen::Models => view! { <ProductModelList /> }.into_any(),
        Screen::Colors => view! { <ColorList /> }.into_any(),
        Screen::Units => view! { <UnitList /> }.into_any(),
        Screen::Formulas => view! { <FormulaList /> }.into_any(),
        Screen::Products => view! { <ProductList /> }.into_any(),
        Screen::Orders => view! { <ProductionOrderList /> }.into_any(),
        Screen::Productions => view! { <ProductionList /> }.into_any(),
        Screen::Users | Screen::Permissions => view! { <UserList /> }.into_any(),
        Screen::WorkGroups => view! { <WorkGroupList /> }.into_any(),
    }
}

pub fn render_tab_content(key: &str) -> AnyView {
    match Screen::from_tab_key(key) {
        Some(screen) => view! {
            <RequireScreen screen=screen>
                {move || screen_page(screen)}
            </RequireScreen>
        }
        .into_any(),
        None => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Pestaña desconocida"</div> }.into_any()
        }
    }
}
