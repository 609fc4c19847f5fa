use std::cell::{
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::savemanager::SaveManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    success_rate: Vec<serde_json::Value>,
    gold_rate: Vec<serde_json::Value>
}

/// Root object holding the two curve configuration stores the admin
/// screens work against: base success rates and gold earning rates.
pub struct Configuration {
    success_rate_manager_cell: RefCell<SaveManager>,
    gold_rate_manager_cell: RefCell<SaveManager>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            success_rate_manager_cell: RefCell::new(SaveManager::new()),
            gold_rate_manager_cell: RefCell::new(SaveManager::new())
        }
    }

    pub fn success_rate_manager(&self) -> RefMut<'_, SaveManager> {
        self.success_rate_manager_cell.borrow_mut()
    }

    pub fn gold_rate_manager(&self) -> RefMut<'_, SaveManager> {
        self.gold_rate_manager_cell.borrow_mut()
    }

    /// Loads both stores from a single JSON document of the form
    /// `{ "success_rate": [...], "gold_rate": [...] }`.
    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let success_rate_manager = self.success_rate_manager_cell.borrow_mut();
        success_rate_manager.insert_obj_from_json_vec(&json_prop.success_rate)?;
        let gold_rate_manager = self.gold_rate_manager_cell.borrow_mut();
        gold_rate_manager.insert_obj_from_json_vec(&json_prop.gold_rate)?;
        Ok(())
    }
}
