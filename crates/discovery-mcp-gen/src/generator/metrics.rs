use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub schemas_generated: usize,
  pub operations_converted: usize,
  pub fields_generated: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub orphaned_schemas_count: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_schema(&mut self, field_count: usize) {
    self.schemas_generated += 1;
    self.fields_generated += field_count;
  }

  pub fn record_operation(&mut self, param_count: usize) {
    self.operations_converted += 1;
    self.fields_generated += param_count;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_orphaned_schemas(&mut self, count: usize) {
    self.orphaned_schemas_count += count;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema}' is not defined (referenced by {referenced_by}); typed as serde_json::Value")]
  UnresolvedReference { schema: String, referenced_by: String },
  #[strum(to_string = "[{type_name}] '{wire_name}' renamed to field '{field}' to avoid a collision")]
  DuplicateFieldName {
    type_name: String,
    wire_name: String,
    field: String,
  },
}

impl GenerationWarning {
  /// Warnings that change the shape of the generated API rather than just naming.
  pub fn is_lossy(&self) -> bool {
    matches!(self, Self::UnresolvedReference { .. })
  }
}
