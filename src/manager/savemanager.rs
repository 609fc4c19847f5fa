use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use tracing::info;
use uuid::Uuid;

use crate::objectwithuuid::ObjectWithUUID;
use crate::rate::curveconfig::CurveConfig;
use crate::rate::ratesave::RateSave;
use super::managererror::ManagerError;

/// Store of named curve configuration saves, keyed by save name, with at
/// most one save marked current at a time.
pub struct SaveManager {
    map_cell: RefCell<HashMap<String, RateSave>>
}

impl SaveManager {
    pub fn new() -> SaveManager {
        SaveManager { map_cell: RefCell::new(HashMap::new()) }
    }

    fn map(&self) -> RefMut<'_, HashMap<String, RateSave>> {
        self.map_cell.borrow_mut()
    }

    fn clear_current(map: &mut HashMap<String, RateSave>) {
        for save in map.values_mut() {
            save.set_current(false);
        }
    }

    /// Creates a new save under `name`. The name must be unused.
    pub fn create(&self, name: String, config: CurveConfig) -> Result<Uuid, ManagerError> {
        let mut map = self.map();
        if map.contains_key(&name) {
            return Err(ManagerError::DuplicateName(name));
        }
        let save = RateSave::new(name.clone(), config);
        let id = *save.uuid();
        info!(save = %name, %id, "created curve configuration save");
        map.insert(name, save);
        Ok(id)
    }

    /// Overwrites the configuration of an existing save.
    pub fn update(&self, name: &str, config: CurveConfig) -> Result<(), ManagerError> {
        let mut map = self.map();
        let save = map
            .get_mut(name)
            .ok_or_else(|| ManagerError::NameNotFound(name.to_owned()))?;
        save.set_config(config);
        info!(save = %name, "updated curve configuration save");
        Ok(())
    }

    /// Marks the named save current, clearing the previous current one,
    /// and returns it.
    pub fn load(&self, name: &str) -> Result<RateSave, ManagerError> {
        let mut map = self.map();
        if !map.contains_key(name) {
            return Err(ManagerError::NameNotFound(name.to_owned()));
        }
        let mut loaded = None;
        for (key, save) in map.iter_mut() {
            let is_loaded = key == name;
            save.set_current(is_loaded);
            if is_loaded {
                loaded = Some(save.clone());
            }
        }
        match loaded {
            Some(save) => {
                info!(save = %name, "loaded curve configuration save");
                Ok(save)
            },
            None => Err(ManagerError::NameNotFound(name.to_owned()))
        }
    }

    /// Removes the named save. Deleting the current save leaves the store
    /// with no current configuration.
    pub fn delete(&self, name: &str) -> Result<(), ManagerError> {
        let removed = self.map().remove(name);
        match removed {
            Some(_) => {
                info!(save = %name, "deleted curve configuration save");
                Ok(())
            },
            None => Err(ManagerError::NameNotFound(name.to_owned()))
        }
    }

    pub fn get(&self, name: &str) -> Result<RateSave, ManagerError> {
        let map = self.map();
        let save_opt = map.get(name);
        save_opt.map_or(
            Err(ManagerError::NameNotFound(name.to_owned())),
            |save| Ok(save.clone())
        )
    }

    pub fn get_by_id(&self, id: &Uuid) -> Result<RateSave, ManagerError> {
        let map = self.map();
        map.values()
            .find(|save| save.uuid() == id)
            .cloned()
            .ok_or(ManagerError::IdNotFound(*id))
    }

    /// The save live entities are currently rated with, if any.
    pub fn current(&self) -> Option<RateSave> {
        self.map().values().find(|save| save.is_current()).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let save: RateSave = serde_json::from_value(json_value)?;
        let mut map = self.map();
        if save.is_current() {
            Self::clear_current(&mut map);
        }
        map.insert(save.name().to_owned(), save);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&self, json_vec: &Vec<serde_json::Value>) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }

    /// Loads saves from a JSON file holding either a single save object or
    /// an array of them.
    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = serde_json::from_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)?;
        } else {
            self.insert_obj_from_json(json_value)?;
        }
        Ok(())
    }
}
