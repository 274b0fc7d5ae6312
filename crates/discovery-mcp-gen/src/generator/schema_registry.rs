use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::{Direction, algo::tarjan_scc, graphmap::DiGraphMap, visit::Dfs};

use crate::discovery::Schema;

/// Order in which collected schemas are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SchemaOrder {
  /// Dependencies before dependents; cycles grouped, ties broken by name.
  #[default]
  Topological,
  /// Plain lexicographic order of schema names.
  Alphabetical,
}

/// Result of collecting the schemas reachable from a set of operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedSchemas {
  /// Reachable schemas that exist in the document.
  pub names: BTreeSet<String>,
  /// Referenced names missing from the document, with the schemas or operations referencing them.
  pub unresolved: BTreeMap<String, BTreeSet<String>>,
}

/// Name-keyed view of the document's schemas and the references between them.
#[derive(Debug)]
pub(crate) struct SchemaRegistry<'a> {
  schemas: &'a BTreeMap<String, Schema>,
  /// schema name -> names it references directly, including names that do not exist
  dependencies: BTreeMap<&'a str, BTreeSet<&'a str>>,
}

impl<'a> SchemaRegistry<'a> {
  pub(crate) fn new(schemas: &'a BTreeMap<String, Schema>) -> Self {
    let dependencies = schemas
      .iter()
      .map(|(name, schema)| {
        let mut refs = BTreeSet::new();
        Self::collect_refs(schema, &mut refs);
        (name.as_str(), refs)
      })
      .collect();

    Self { schemas, dependencies }
  }

  pub(crate) fn get(&self, name: &str) -> Option<&'a Schema> {
    self.schemas.get(name)
  }

  pub(crate) fn len(&self) -> usize {
    self.schemas.len()
  }

  /// Collects every `$ref` found in `schema` and its inline sub-schemas (properties, array items,
  /// map values). Inline nesting is a finite tree, so this never follows a reference.
  pub(crate) fn collect_refs<'s>(schema: &'s Schema, refs: &mut BTreeSet<&'s str>) {
    if !schema.reference.is_empty() {
      refs.insert(schema.reference.as_str());
    }
    for child in schema.children() {
      Self::collect_refs(child, refs);
    }
  }

  fn graph(&self) -> DiGraphMap<&'a str, ()> {
    let mut graph = DiGraphMap::new();
    for (name, deps) in &self.dependencies {
      graph.add_node(*name);
      for dep in deps {
        graph.add_edge(*name, *dep, ());
      }
    }
    graph
  }

  /// Transitive closure of the schemas referenced by the given `(operation, schema)` roots.
  ///
  /// Every schema is visited once, so cyclic references terminate. Names that are not in the
  /// document are reported in [`CollectedSchemas::unresolved`] and left out of the result.
  pub(crate) fn collect<'r>(&self, roots: impl IntoIterator<Item = (&'r str, &'r str)>) -> CollectedSchemas {
    let graph = self.graph();
    let mut collected = CollectedSchemas::default();
    let mut reached = BTreeSet::new();

    let roots: Vec<(&str, &str)> = roots.into_iter().collect();
    for (operation, root) in &roots {
      if !self.schemas.contains_key(*root) {
        collected
          .unresolved
          .entry((*root).to_string())
          .or_default()
          .insert((*operation).to_string());
      }
    }

    let mut dfs = Dfs::empty(&graph);
    for (_, root) in &roots {
      let Some(root) = self.schemas.get_key_value(*root).map(|(name, _)| name.as_str()) else {
        continue;
      };
      dfs.move_to(root);
      while let Some(node) = dfs.next(&graph) {
        reached.insert(node);
      }
    }

    for name in reached.iter().copied() {
      if self.schemas.contains_key(name) {
        collected.names.insert(name.to_string());
        continue;
      }
      let referenced_by = graph
        .neighbors_directed(name, Direction::Incoming)
        .filter(|referrer| reached.contains(referrer))
        .map(str::to_string);
      collected
        .unresolved
        .entry(name.to_string())
        .or_default()
        .extend(referenced_by);
    }

    collected
  }

  fn subgraph<'n>(&self, names: &'n BTreeSet<String>) -> DiGraphMap<&'n str, ()> {
    let mut graph = DiGraphMap::new();
    for name in names {
      graph.add_node(name.as_str());
    }
    for name in names {
      let Some(deps) = self.dependencies.get(name.as_str()) else {
        continue;
      };
      for dep in deps.iter().filter_map(|dep| names.get(*dep)) {
        graph.add_edge(name.as_str(), dep.as_str(), ());
      }
    }
    graph
  }

  /// Orders collected schema names for emission.
  pub(crate) fn ordered(&self, names: &BTreeSet<String>, order: SchemaOrder) -> Vec<String> {
    match order {
      SchemaOrder::Alphabetical => names.iter().cloned().collect(),
      SchemaOrder::Topological => self.topological(names),
    }
  }

  /// Dependencies first. Strongly connected components are emitted together with their members
  /// sorted; independent components are released in order of their smallest member name.
  fn topological(&self, names: &BTreeSet<String>) -> Vec<String> {
    let graph = self.subgraph(names);
    let mut components: Vec<Vec<&str>> = tarjan_scc(&graph);
    for members in &mut components {
      members.sort_unstable();
    }

    let component_of: HashMap<&str, usize> = components
      .iter()
      .enumerate()
      .flat_map(|(index, members)| members.iter().map(move |name| (*name, index)))
      .collect();

    let mut pending = vec![0usize; components.len()];
    let mut dependents: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); components.len()];
    for (from, to, ()) in graph.all_edges() {
      let (dependent, dependency) = (component_of[from], component_of[to]);
      if dependent != dependency && dependents[dependency].insert(dependent) {
        pending[dependent] += 1;
      }
    }

    let mut ready: BTreeSet<(&str, usize)> = components
      .iter()
      .enumerate()
      .filter(|(index, _)| pending[*index] == 0)
      .map(|(index, members)| (members[0], index))
      .collect();

    let mut ordered = Vec::with_capacity(names.len());
    while let Some((_, index)) = ready.pop_first() {
      ordered.extend(components[index].iter().map(|name| (*name).to_string()));
      for dependent in &dependents[index] {
        pending[*dependent] -= 1;
        if pending[*dependent] == 0 {
          ready.insert((components[*dependent][0], *dependent));
        }
      }
    }

    ordered
  }

  /// Reference cycles among `names`: components with several members or a self reference.
  pub(crate) fn cycles(&self, names: &BTreeSet<String>) -> Vec<Vec<String>> {
    let graph = self.subgraph(names);
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut members: Vec<String> = scc.into_iter().map(String::from).collect();
        members.sort();
        members
      })
      .collect();
    cycles.sort();
    cycles
  }
}
