// Startup seeding of the default dashboard layout
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::errors::Result;
use crate::domain::category::NewCategory;
use crate::domain::panel::NewPanel;

/// Panels and their categories created on first start
pub const DEFAULT_LAYOUT: &[(&str, &[&str])] = &[
    ("Work", &["Teaching", "Build", "Admin"]),
    ("Personal", &["Home", "Finance"]),
];

/// Insert [`DEFAULT_LAYOUT`] when the store has no panels.
///
/// Returns `true` when seeding happened. Safe to call on every start.
pub async fn seed_defaults(repository: &dyn DashboardRepository) -> Result<bool> {
    if !repository.list_panels().await?.is_empty() {
        tracing::debug!("Store already has panels, skipping seed");
        return Ok(false);
    }

    for (panel_position, (panel_name, categories)) in DEFAULT_LAYOUT.iter().enumerate() {
        let panel = repository
            .insert_panel(NewPanel::new(*panel_name, panel_position as i64))
            .await?;
        for (position, name) in categories.iter().enumerate() {
            repository
                .insert_category(NewCategory {
                    name: name.to_string(),
                    panel_id: panel.id,
                    position: position as i64,
                })
                .await?;
        }
    }

    tracing::info!("Seeded {} default panels", DEFAULT_LAYOUT.len());
    Ok(true)
}
