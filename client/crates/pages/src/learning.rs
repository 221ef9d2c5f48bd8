//! Learning Center
//!
//! Modules with per-module progress and points. Open to guests, whose
//! progress starts at zero. Lesson completion is tracked locally for the
//! session; there is no progress endpoint.

use backend::models::{Difficulty, LearningModule};
use backend::{BackendApi, Credentials};
use platform::fallback::Sourced;
use serde::Serialize;

use crate::mock::LEARNING_MODULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    pub completed_lessons: u32,
    pub lesson_count: u32,
    /// 0-100
    pub percent: u8,
    pub completed: bool,
}

impl ModuleProgress {
    pub fn of(module: &LearningModule) -> Self {
        let completed_lessons = module.completed_lessons.min(module.lesson_count);
        let percent = if module.lesson_count == 0 {
            0
        } else {
            (completed_lessons * 100 / module.lesson_count) as u8
        };
        Self {
            completed_lessons,
            lesson_count: module.lesson_count,
            percent,
            completed: module.lesson_count > 0 && completed_lessons == module.lesson_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LearningCenter {
    modules: Sourced<Vec<LearningModule>>,
}

impl LearningCenter {
    pub async fn load<B: BackendApi>(api: &B, credentials: &Credentials) -> Self {
        let modules = LEARNING_MODULES
            .load(api.learning_modules(credentials))
            .await;
        tracing::debug!(
            count = modules.data.len(),
            fallback = modules.origin.is_fallback(),
            "Learning modules loaded"
        );
        Self { modules }
    }

    pub fn modules(&self) -> &[LearningModule] {
        &self.modules.data
    }

    pub fn notice(&self) -> Option<String> {
        self.modules.notice()
    }

    pub fn module(&self, module_id: &str) -> Option<&LearningModule> {
        self.modules.data.iter().find(|m| m.id == module_id)
    }

    pub fn progress(&self, module_id: &str) -> Option<ModuleProgress> {
        self.module(module_id).map(ModuleProgress::of)
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> impl Iterator<Item = &LearningModule> {
        self.modules
            .data
            .iter()
            .filter(move |m| m.difficulty == difficulty)
    }

    /// Distinct categories in display order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for m in &self.modules.data {
            if !seen.contains(&m.category.as_str()) {
                seen.push(m.category.as_str());
            }
        }
        seen
    }

    /// Points from fully completed modules
    pub fn points_earned(&self) -> u32 {
        self.modules
            .data
            .iter()
            .filter(|m| ModuleProgress::of(m).completed)
            .map(|m| m.points)
            .sum()
    }

    pub fn points_available(&self) -> u32 {
        self.modules.data.iter().map(|m| m.points).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.modules
            .data
            .iter()
            .filter(|m| ModuleProgress::of(m).completed)
            .count()
    }

    /// Mark the next lesson of a module done
    ///
    /// Returns the module's points when this lesson completes it, `Some(0)`
    /// for any other recorded lesson and `None` for an unknown or already
    /// completed module.
    pub fn complete_lesson(&mut self, module_id: &str) -> Option<u32> {
        let module = self.modules.data.iter_mut().find(|m| m.id == module_id)?;
        if module.completed_lessons >= module.lesson_count {
            return None;
        }
        module.completed_lessons += 1;

        if module.completed_lessons == module.lesson_count {
            tracing::info!(module_id, points = module.points, "Module completed");
            Some(module.points)
        } else {
            Some(0)
        }
    }
}
