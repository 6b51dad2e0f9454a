//! Dependency ordering of entities

use std::collections::HashMap;

use ddlgen_types::Entity;

/// Order entities so that referenced tables come before the tables that
/// reference them.
///
/// Stable: entities without a pending dependency keep their input order.
/// Self references and references to tables outside `entities` are ignored.
/// When only a cycle remains, the first remaining entity is emitted next.
///
/// ```
/// use ddlgen_generator::order_by_dependencies;
/// use ddlgen_types::{Entity, ForeignKey};
///
/// let entities = [
///     Entity::new("Post").foreign_key(ForeignKey::new("fk", "user_id", "user", "id")),
///     Entity::new("User"),
/// ];
/// let ordered: Vec<_> = order_by_dependencies(&entities)
///     .iter()
///     .map(|e| e.table_name.as_ref())
///     .collect();
/// assert_eq!(ordered, ["user", "post"]);
/// ```
#[must_use]
pub fn order_by_dependencies(entities: &[Entity]) -> Vec<&Entity> {
    let index: HashMap<&str, usize> = entities
        .iter()
        .enumerate()
        .map(|(i, e)| (e.table_name.as_ref(), i))
        .collect();

    let dependencies: Vec<Vec<usize>> = entities
        .iter()
        .enumerate()
        .map(|(i, e)| {
            e.foreign_keys
                .iter()
                .filter_map(|fk| index.get(fk.referenced_table_name.as_ref()).copied())
                .filter(|&j| j != i)
                .collect()
        })
        .collect();

    let mut placed = vec![false; entities.len()];
    let mut ordered = Vec::with_capacity(entities.len());

    while ordered.len() < entities.len() {
        let ready = (0..entities.len())
            .find(|&i| !placed[i] && dependencies[i].iter().all(|&j| placed[j]));
        let Some(next) = ready.or_else(|| (0..entities.len()).find(|&i| !placed[i])) else {
            break;
        };
        placed[next] = true;
        ordered.push(&entities[next]);
    }

    ordered
}
