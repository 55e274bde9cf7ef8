use crate::domain::model::{ColumnIndices, Role};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, Validate};
use serde::{Deserialize, Serialize};

const BOM: char = '\u{feff}';

/// Header names accepted for each role. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSynonyms {
    pub product: Vec<String>,
    pub price: Vec<String>,
    pub weight: Vec<String>,
}

impl Default for ColumnSynonyms {
    fn default() -> Self {
        fn owned(names: &[&str]) -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        }

        Self {
            product: owned(&["название", "продукт", "товар", "наименование"]),
            price: owned(&["цена", "розница"]),
            weight: owned(&["фасовка", "масса", "вес"]),
        }
    }
}

impl ColumnSynonyms {
    pub fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Product => &self.product,
            Role::Price => &self.price,
            Role::Weight => &self.weight,
        }
    }

    /// Finds the first header cell, left to right, matching each role.
    /// On failure returns every role that has no matching cell.
    pub fn resolve<'a, I>(&self, headers: I) -> std::result::Result<ColumnIndices, Vec<Role>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut found: [Option<usize>; 3] = [None; 3];

        for (index, raw) in headers.into_iter().enumerate() {
            let cell = if index == 0 {
                raw.trim_start_matches(BOM)
            } else {
                raw
            };

            for (slot, role) in found.iter_mut().zip(Role::ALL) {
                if slot.is_none() && self.for_role(role).iter().any(|name| name == cell) {
                    *slot = Some(index);
                }
            }
        }

        match found {
            [Some(product), Some(price), Some(weight)] => Ok(ColumnIndices {
                product,
                price,
                weight,
            }),
            _ => Err(Role::ALL
                .into_iter()
                .zip(found)
                .filter(|(_, slot)| slot.is_none())
                .map(|(role, _)| role)
                .collect()),
        }
    }
}

impl Validate for ColumnSynonyms {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("columns.product", &self.product)?;
        validate_non_empty_list("columns.price", &self.price)?;
        validate_non_empty_list("columns.weight", &self.weight)?;
        Ok(())
    }
}
