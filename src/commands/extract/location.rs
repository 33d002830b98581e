use std::collections::HashMap;

use crate::model::Location;

const ID_SEPARATOR: &str = ".";

pub(crate) fn rule_location(id_to_name: &HashMap<String, String>, rule_id: &str) -> Vec<Location> {
    let parts = rule_id.split(ID_SEPARATOR).collect::<Vec<&str>>();

    (1..parts.len())
        .filter_map(|depth| {
            let parent_id = parts[..depth].join(ID_SEPARATOR);
            id_to_name.get(&parent_id).map(|name| Location {
                id: parent_id,
                name: name.clone(),
            })
        })
        .collect()
}
