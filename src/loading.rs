use crate::core::state::AppState;
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        // a missing image is not fatal, the earth is just not drawn
        app.add_loading_state(
            LoadingState::new(AppState::Loading)
                .continue_to_state(AppState::Running)
                .on_failure_continue_to_state(AppState::Running)
                .load_collection::<EarthAssets>(),
        );
    }
}

#[derive(AssetCollection, Resource)]
pub struct EarthAssets {
    #[asset(path = "textures/earth.jpg")]
    pub earth: Handle<Image>,
}
