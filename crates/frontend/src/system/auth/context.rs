use contracts::domain::common::EntityId;
use contracts::system::auth::UserInfo;
use contracts::system::permissions::{AccessContext, PermissionMatrix, Screen};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::crud::ApiError;
use crate::system::permissions::api as permissions_api;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub access: AccessContext,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Loads the permission matrix and builds the signed-in state.
///
/// Admins skip the matrix: they always get the full degree.
async fn establish_session(access_token: String, user: UserInfo) -> Result<AuthState, ApiError> {
    let matrix = if user.is_admin {
        PermissionMatrix::new(user.id)
    } else {
        let rows = permissions_api::fetch_for_user(user.id).await?;
        PermissionMatrix::from_permissions(user.id, &rows)
    };
    log::info!(
        "session for '{}': {} permission cells",
        user.username,
        matrix.entries.len()
    );
    Ok(AuthState {
        access_token: Some(access_token),
        access: AccessContext {
            is_admin: user.is_admin,
            active_sector: storage::get_active_sector(),
            matrix,
        },
        user_info: Some(user),
    })
}

async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;

    // Validate token by fetching current user
    if let Ok(user) = api::get_current_user(&access_token).await {
        return establish_session(access_token, user).await.ok();
    }

    // Token invalid, try refresh
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };
    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            let user = api::get_current_user(&response.access_token).await.ok()?;
            establish_session(response.access_token, user).await.ok()
        }
        Err(e) => {
            log::warn!("session refresh failed: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    spawn_local(async move {
        if let Some(state) = restore_session().await {
            set_auth_state.set(state);
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    (
        expect_context::<ReadSignal<AuthState>>(),
        expect_context::<WriteSignal<AuthState>>(),
    )
}

/// Access of the signed-in user, follows sector changes.
pub fn use_access() -> Signal<AccessContext> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.access.clone()))
}

/// Screens listed in the sidebar.
pub fn visible_screens(state: &AuthState) -> Vec<Screen> {
    if state.is_admin() {
        return Screen::ALL.to_vec();
    }
    state.access.matrix.visible_screens(state.access.active_sector)
}

/// Helper: Perform login
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    // Save tokens before the permission call, it authenticates with them
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    match establish_session(response.access_token, response.user).await {
        Ok(state) => {
            set_auth_state.set(state);
            Ok(())
        }
        Err(e) => {
            storage::clear_tokens();
            Err(e)
        }
    }
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

/// Switch the sector permissions are resolved against.
pub fn set_active_sector(set_auth_state: WriteSignal<AuthState>, sector_id: Option<EntityId>) {
    storage::save_active_sector(sector_id);
    set_auth_state.update(|s| s.access.active_sector = sector_id);
}
