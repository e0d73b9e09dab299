use assembly_core::{AssemblyKind, CoreError, Entity, EntityId, Source, SourceId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::field::{visible_fields, Field};
use crate::ports::{BackendApi, EntityResolver, RequestStatus};
use crate::request::{AssemblyRequest, PreparedRequest, RequestConfig};
use crate::state::AssemblyForm;
use crate::FormError;

/// User input delivered to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Raw text of the homology length input.
    SetMinimalHomology(String),
    SetEnzymes(Vec<String>),
    ToggleCircularOnly,
    ToggleAllowPartialOverlaps,
    ToggleBluntLigation,
    Submit,
}

/// What an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    /// The event targets a field this assembly type does not show.
    Ignored,
    Sent { endpoint: &'static str },
    /// Submission withheld: no enzyme selected for restriction and ligation.
    Blocked,
}

/// Value shown by a field control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u32),
    Enzymes(Vec<String>),
    Checked(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldControl {
    pub field: Field,
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputsSelectorView {
    pub input_entity_ids: Vec<EntityId>,
    pub source_id: SourceId,
    pub source_type: AssemblyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub request_status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputsSelectorView {
    pub sources: Vec<Source>,
    pub entities: Vec<Entity>,
    pub source_id: SourceId,
    pub input_entities: Vec<Entity>,
}

/// Snapshot of everything the renderer draws for the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub inputs: InputsSelectorView,
    pub controls: Vec<FieldControl>,
    /// `None` while submission is blocked.
    pub submit: Option<SubmitButtonView>,
    pub outputs: OutputsSelectorView,
}

/// Assembly form bound to one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyConfigurator {
    source_id: SourceId,
    form: AssemblyForm,
}

impl AssemblyConfigurator {
    pub fn new(source_id: impl Into<SourceId>, kind: AssemblyKind) -> Self {
        Self::with_config(source_id, kind, &FormConfig::default())
    }

    pub fn with_config(
        source_id: impl Into<SourceId>,
        kind: AssemblyKind,
        config: &FormConfig,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            form: AssemblyForm::new(kind, config),
        }
    }

    /// Create from the backend's assembly type tag.
    pub fn from_tag(
        source_id: impl Into<SourceId>,
        tag: &str,
        config: &FormConfig,
    ) -> Result<Self, FormError> {
        let kind: AssemblyKind = tag.parse()?;
        Ok(Self::with_config(source_id, kind, config))
    }

    /// Create for a source record held by the store.
    pub fn from_source(source: &Source, config: &FormConfig) -> Result<Self, FormError> {
        let kind = source.assembly_kind().ok_or_else(|| {
            CoreError::UnknownAssemblyKind(source.source_type.clone().unwrap_or_default())
        })?;
        Ok(Self::with_config(source.id, kind, config))
    }

    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    pub fn kind(&self) -> AssemblyKind {
        self.form.kind()
    }

    pub fn form(&self) -> &AssemblyForm {
        &self.form
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Apply one event. `Submit` sends through `backend`; every other event
    /// only touches local state.
    pub fn update<R, B>(
        &mut self,
        event: FormEvent,
        resolver: &R,
        backend: &mut B,
    ) -> Result<Outcome, FormError>
    where
        R: EntityResolver,
        B: BackendApi,
    {
        let applied = match event {
            FormEvent::SetMinimalHomology(text) => {
                Field::MinimalHomology.is_shown_for(self.kind())
                    && self.form.set_minimal_homology(parse_homology(&text)?)
            }
            FormEvent::SetEnzymes(enzymes) => self.form.set_enzymes(enzymes),
            FormEvent::ToggleCircularOnly => {
                self.form.toggle_circular_only();
                true
            }
            FormEvent::ToggleAllowPartialOverlaps => self.form.toggle_allow_partial_overlaps(),
            FormEvent::ToggleBluntLigation => self.form.toggle_blunt_ligation(),
            FormEvent::Submit => return Ok(self.submit(resolver, backend)),
        };

        if applied {
            debug!(source_id = %self.source_id, form = ?self.form, "assembly form updated");
            Ok(Outcome::Changed)
        } else {
            debug!(
                source_id = %self.source_id,
                kind = %self.kind(),
                "event for hidden field ignored"
            );
            Ok(Outcome::Ignored)
        }
    }

    /// Build the request for the given input entities, or `None` while
    /// submission is blocked.
    pub fn build_request(&self, entities: Vec<Entity>) -> Option<PreparedRequest> {
        if !self.form.can_submit() {
            return None;
        }
        let mut request = AssemblyRequest::new(entities);
        if let Some(enzymes) = self.form.enzymes() {
            request = request.with_restriction_enzymes(enzymes.to_vec());
        }
        Some(PreparedRequest {
            endpoint: self.kind().endpoint(),
            request,
            config: RequestConfig {
                params: self.form.params(),
            },
        })
    }

    /// Resolve the inputs and hand the request to the backend. The response
    /// is not inspected here.
    pub fn submit<R, B>(&self, resolver: &R, backend: &mut B) -> Outcome
    where
        R: EntityResolver,
        B: BackendApi,
    {
        let entities = resolver.input_entities(self.source_id);
        let Some(prepared) = self.build_request(entities) else {
            warn!(
                source_id = %self.source_id,
                "submission blocked: no restriction enzyme selected"
            );
            return Outcome::Blocked;
        };
        info!(
            source_id = %self.source_id,
            endpoint = prepared.endpoint,
            inputs = prepared.request.source.input.len(),
            "sending assembly request"
        );
        backend.send_post_request(prepared.endpoint, prepared.request, prepared.config);
        Outcome::Sent {
            endpoint: prepared.endpoint,
        }
    }

    pub fn view<R, B>(&self, resolver: &R, backend: &B) -> FormView
    where
        R: EntityResolver,
        B: BackendApi,
    {
        let input_entities = resolver.input_entities(self.source_id);
        let controls = visible_fields(self.kind())
            .iter()
            .filter_map(|field| {
                self.field_value(*field).map(|value| FieldControl {
                    field: *field,
                    label: field.label(),
                    value,
                })
            })
            .collect();
        let submit = self.can_submit().then(|| SubmitButtonView {
            label: "Submit",
            request_status: backend.request_status(),
        });

        FormView {
            inputs: InputsSelectorView {
                input_entity_ids: input_entities.iter().map(|e| e.id).collect(),
                source_id: self.source_id,
                source_type: self.kind(),
            },
            controls,
            submit,
            outputs: OutputsSelectorView {
                sources: backend.sources(),
                entities: backend.entities(),
                source_id: self.source_id,
                input_entities,
            },
        }
    }

    fn field_value(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::MinimalHomology => self.form.minimal_homology().map(FieldValue::Number),
            Field::Enzymes => self.form.enzymes().map(|e| FieldValue::Enzymes(e.to_vec())),
            Field::CircularOnly => Some(FieldValue::Checked(self.form.circular_only())),
            Field::AllowPartialOverlaps => {
                self.form.allow_partial_overlaps().map(FieldValue::Checked)
            }
            Field::BluntLigation => self.form.blunt().map(FieldValue::Checked),
        }
    }
}

fn parse_homology(text: &str) -> Result<u32, FormError> {
    text.trim()
        .parse()
        .map_err(|_| FormError::InvalidHomology(text.to_string()))
}
