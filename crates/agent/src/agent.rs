//! College admissions agent
//!
//! Stateless per-request pipeline over a read-only dataset snapshot:
//! intent classification and entity extraction run first, then either
//! the resolver cascade (attribute queries) or the cutoff filter
//! (recommendation queries), and finally template composition.

use std::sync::Arc;

use parking_lot::RwLock;

use college_agent_config::ResponseTemplates;
use college_agent_core::{Query, QueryIntent};
use college_agent_nlu::{EntityExtractor, IntentClassifier};
use college_agent_retrieval::{
    filter_above, filter_below, load_dataset, CollegeIndex, CollegeResolver, IndexHandle,
};

use crate::composer::ResponseComposer;
use crate::AgentError;

/// The query-answering agent.
///
/// Holds only immutable per-snapshot state; each query resolves
/// independently, so concurrent requests need no locking beyond the
/// snapshot read.
pub struct CollegeAgent {
    index: IndexHandle,
    /// Rebuilt on reload: its vocabularies are dataset-derived
    extractor: RwLock<Arc<EntityExtractor>>,
    classifier: IntentClassifier,
    resolver: CollegeResolver,
    composer: ResponseComposer,
    /// Source file for reloads, when loaded from disk
    dataset_path: Option<String>,
}

impl CollegeAgent {
    /// Build an agent over an already-loaded index
    pub fn new(index: CollegeIndex, templates: ResponseTemplates) -> Self {
        let extractor = Arc::new(EntityExtractor::with_dataset(
            index.course_vocabulary(),
            index.college_names(),
        ));

        Self {
            index: IndexHandle::new(index),
            extractor: RwLock::new(extractor),
            classifier: IntentClassifier::new(),
            resolver: CollegeResolver::new(),
            composer: ResponseComposer::new(templates),
            dataset_path: None,
        }
    }

    /// Load the dataset file and build the agent. Errors surface here,
    /// at startup, not on first use.
    pub fn from_dataset_file(
        path: impl Into<String>,
        templates: ResponseTemplates,
    ) -> Result<Self, AgentError> {
        let path = path.into();
        let records = load_dataset(&path)?;
        let index = CollegeIndex::from_records(records)?;

        let mut agent = Self::new(index, templates);
        agent.dataset_path = Some(path);
        Ok(agent)
    }

    /// Rebuild the index from the dataset file and swap it in
    /// atomically. In-flight queries keep their snapshot.
    pub fn reload(&self) -> Result<(), AgentError> {
        let path = self
            .dataset_path
            .as_deref()
            .ok_or_else(|| AgentError::Dataset("no dataset path to reload from".to_string()))?;

        let records = load_dataset(path)?;
        let index = CollegeIndex::from_records(records)?;

        *self.extractor.write() = Arc::new(EntityExtractor::with_dataset(
            index.course_vocabulary(),
            index.college_names(),
        ));
        self.index.swap(index);
        Ok(())
    }

    /// Number of colleges in the current snapshot
    pub fn college_count(&self) -> usize {
        self.index.snapshot().len()
    }

    /// Validate raw text and answer it
    pub fn handle_text(&self, text: &str, user_id: Option<String>) -> Result<String, AgentError> {
        let query = Query::new(text, user_id)?;
        Ok(self.handle_query(&query))
    }

    /// Answer a validated query. Total: resolution misses and missing
    /// data become messages, never errors.
    pub fn handle_query(&self, query: &Query) -> String {
        let snapshot = self.index.snapshot();
        let extractor = Arc::clone(&self.extractor.read());

        let intent = self.classifier.classify(&query.text);
        let entities = extractor.extract(&query.text);

        tracing::debug!(
            intent = intent.display_name(),
            user = query.user_id.as_deref().unwrap_or("-"),
            "handling query"
        );

        let response = match intent {
            QueryIntent::CutoffAbove | QueryIntent::CutoffBelow => match entities.number {
                None => self.composer.cutoff_prompt(),
                Some(percentile) => {
                    let (matches, direction) = if intent == QueryIntent::CutoffAbove {
                        (filter_above(&snapshot, percentile, entities.category), "above")
                    } else {
                        (filter_below(&snapshot, percentile, entities.category), "below")
                    };
                    self.composer.compose_cutoff_results(
                        &matches,
                        direction,
                        percentile,
                        entities.category,
                    )
                }
            },
            _ => {
                // Prefer the extracted college-name hint over the raw text
                let resolved = entities
                    .college
                    .as_deref()
                    .and_then(|name| self.resolver.resolve(name, &snapshot))
                    .or_else(|| self.resolver.resolve(&query.text, &snapshot));

                match resolved {
                    Some(college) => match intent {
                        QueryIntent::Unknown => self.composer.compose_default(&college.record),
                        _ => self.composer.compose(&college.record, intent, entities.category),
                    },
                    None => {
                        let matches = self.resolver.general_search(&query.text, &snapshot);
                        if matches.is_empty() {
                            self.composer.compose_no_match(&query.text)
                        } else {
                            self.composer.compose_multiple(&matches)
                        }
                    }
                }
            }
        };

        // The composer is total by construction; an empty reply would
        // mean an unanticipated data shape slipped through. Degrade to
        // the generic fallback rather than answering nothing.
        if response.trim().is_empty() {
            tracing::error!(query = %query.text, "composer produced empty response");
            return self.composer.generic_failure();
        }

        response
    }
}
