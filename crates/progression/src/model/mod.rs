//! Progression-model strategies.
//!
//! This module provides the two XP models behind a common capability trait,
//! so that callers select a strategy per entity type instead of branching on
//! type tags at each call site.
//!
//! # Models
//!
//! - Quadratic (`quadratic`) - the six life-domain factions
//! - Power law (`power_law`) - individual skills and the overall character

mod power_law;
mod quadratic;
mod traits;

// Quadratic (faction) exports
pub use quadratic::{
    calculate_faction_level, faction_level_progress, xp_for_faction_level, QuadraticProgression,
};

// Power-law (skill/character) exports
pub use power_law::{
    level_from_xp, progress_to_next_level, total_xp_for_level, xp_for_level, PowerLawProgression,
};

// Core trait
pub use traits::ProgressionModel;

use std::sync::Arc;

/// Registry of available progression models.
pub struct ProgressionRegistry {
    models: Vec<Arc<dyn ProgressionModel>>,
}

impl Default for ProgressionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionRegistry {
    /// Create a new registry with both built-in models.
    pub fn new() -> Self {
        let mut registry = Self { models: Vec::new() };
        registry.register(Arc::new(QuadraticProgression::new()));
        registry.register(Arc::new(PowerLawProgression::new()));
        registry
    }

    /// Register a progression model.
    pub fn register(&mut self, model: Arc<dyn ProgressionModel>) {
        self.models.push(model);
    }

    /// Get a model by its ID.
    pub fn get(&self, model_id: &str) -> Option<Arc<dyn ProgressionModel>> {
        self.models
            .iter()
            .find(|m| m.model_id() == model_id)
            .cloned()
    }

    /// The model governing faction entities.
    pub fn for_factions(&self) -> Arc<dyn ProgressionModel> {
        self.get("quadratic")
            .unwrap_or_else(|| Arc::new(QuadraticProgression::new()))
    }

    /// The model governing skill and character entities.
    pub fn for_skills(&self) -> Arc<dyn ProgressionModel> {
        self.get("power_law")
            .unwrap_or_else(|| Arc::new(PowerLawProgression::new()))
    }

    /// List all registered model IDs.
    pub fn list_models(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.model_id()).collect()
    }
}
