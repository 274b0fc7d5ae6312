use std::collections::BTreeMap;

use crate::discovery::{Document, Method, Resource};

/// Flattened view of every method in a document, keyed by dotted full name (`videos.list`).
pub type MethodIndex<'a> = BTreeMap<String, &'a Method>;

impl Document {
  /// Collects top-level methods and every resource method, naming each by its resource path.
  pub fn all_methods(&self) -> MethodIndex<'_> {
    let mut methods: MethodIndex<'_> = self.methods.iter().map(|(name, method)| (name.clone(), method)).collect();

    for (resource_name, resource) in &self.resources {
      collect_methods(resource_name, resource, &mut methods);
    }

    methods
  }

  /// Method names in lexicographic byte order.
  pub fn sorted_method_names(&self) -> Vec<String> {
    self.all_methods().into_keys().collect()
  }
}

fn collect_methods<'a>(prefix: &str, resource: &'a Resource, methods: &mut MethodIndex<'a>) {
  for (method_name, method) in &resource.methods {
    methods.insert(format!("{prefix}.{method_name}"), method);
  }

  for (sub_name, sub_resource) in &resource.resources {
    collect_methods(&format!("{prefix}.{sub_name}"), sub_resource, methods);
  }
}
