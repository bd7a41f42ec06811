use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryErr {
    #[error("Table list is empty.")]
    Empty,
    #[error("Table {0} not found.")]
    NotFound(String),
}

/// Names of the tables known to the session, in creation order.
#[derive(Debug, Default, Clone)]
pub struct TableRegistry {
    names: Vec<String>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    pub fn register(&mut self, name: &str) {
        self.names.push(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Removes `name`, distinguishing an empty registry from a plain miss.
    pub fn unregister(&mut self, name: &str) -> Result<(), RegistryErr> {
        if self.names.is_empty() {
            return Err(RegistryErr::Empty);
        }
        let pos = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| RegistryErr::NotFound(name.to_string()))?;
        self.names.remove(pos);
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
