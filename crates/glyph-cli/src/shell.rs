//! Interactive menu shell
//!
//! Drives the registry from an [`InputProvider`]. Every action that hits
//! [`Prompt::Abort`] part way through returns without touching the store.

use crate::input::{InputProvider, Prompt};
use crate::render;
use glyph_registry::query;
use glyph_registry::{
    compute_stats, GlyphDraft, GlyphId, GlyphStore, GlyphType, RegistryConfig, RegistryError,
};
use std::io::{self, BufRead, Write};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Exit,
    Add,
    List,
    Search,
    Remove,
    Update,
    Save,
    Load,
    Stats,
}

impl MenuChoice {
    /// Entries in menu-number order
    pub(crate) const ALL: [MenuChoice; 9] = [
        MenuChoice::Exit,
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Remove,
        MenuChoice::Update,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::Stats,
    ];

    /// Entry for a menu number
    pub(crate) fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Registry plus I/O for one interactive session
pub(crate) struct Shell<R, W> {
    io: InputProvider<R, W>,
    store: GlyphStore,
    config: RegistryConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create shell over an empty store
    pub(crate) fn new(io: InputProvider<R, W>, config: RegistryConfig) -> Self {
        Self {
            io,
            store: GlyphStore::new(),
            config,
        }
    }

    /// Current store
    pub(crate) fn store(&self) -> &GlyphStore {
        &self.store
    }

    /// Consume the shell, returning the output sink
    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.io.into_writer()
    }

    /// Load the configured db file if autoload is on and the file exists
    pub(crate) fn autoload(&mut self) -> io::Result<()> {
        if self.config.autoload && self.config.db_path.exists() {
            self.load()?;
        }
        Ok(())
    }

    /// Run the menu loop until the user exits or input ends
    pub(crate) fn run(&mut self) -> io::Result<()> {
        writeln!(self.io.out(), "Welcome to GLYPH.")?;

        loop {
            self.print_menu()?;
            let Prompt::Value(n) = self.io.read_int_in_range("Select an option (0-8 or q): ", 0, 8)?
            else {
                break;
            };
            let Some(choice) = MenuChoice::from_number(n) else {
                continue;
            };
            tracing::debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Exit => break,
                MenuChoice::Add => self.add()?,
                MenuChoice::List => render::glyph_list(self.io.out(), self.store.list())?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Remove => self.remove()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Load => self.load()?,
                MenuChoice::Stats => render::stats(self.io.out(), &compute_stats(self.store.list()))?,
            }
        }

        writeln!(self.io.out(), "Goodbye.")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let out = self.io.out();
        writeln!(out, "\n=== GLYPH : Asset Registry Utility ===")?;
        writeln!(out, "Type 'q' at any prompt to quit.\n")?;
        writeln!(out, "1) Add glyph")?;
        writeln!(out, "2) List glyphs")?;
        writeln!(out, "3) Search / Filter")?;
        writeln!(out, "4) Remove glyph (by id)")?;
        writeln!(out, "5) Update glyph (by id)")?;
        writeln!(out, "6) Save glyphs")?;
        writeln!(out, "7) Load glyphs")?;
        writeln!(out, "8) Show stats")?;
        writeln!(out, "0) Exit")
    }

    /// Prompt for a type name; unknown names cancel
    fn read_type(&mut self, prompt: &str) -> io::Result<Option<GlyphType>> {
        let Prompt::Value(text) = self.io.read_non_empty(prompt)? else {
            return Ok(None);
        };
        match GlyphType::parse(&text) {
            Ok(kind) => Ok(Some(kind)),
            Err(_) => {
                writeln!(self.io.out(), "Unknown type. Cancelled.")?;
                Ok(None)
            }
        }
    }

    fn add(&mut self) -> io::Result<()> {
        writeln!(self.io.out(), "\nAdd Glyph\nType 'q' to go back.")?;

        let Prompt::Value(name) = self.io.read_non_empty("Name: ")? else {
            return Ok(());
        };
        let Some(kind) = self.read_type(&format!("Type ({}): ", GlyphType::choices()))? else {
            return Ok(());
        };
        let Prompt::Value(path) = self.io.read_non_empty("Path: ")? else {
            return Ok(());
        };
        if self.store.path_in_use(&path) {
            writeln!(self.io.out(), "That path is already used by another glyph. Cancelled.")?;
            return Ok(());
        }
        let Prompt::Value(size_mb) = self.io.read_f64_min("Size (MB, >= 0): ", 0.0)? else {
            return Ok(());
        };
        let Prompt::Value(tag) = self.io.read_non_empty("Tag: ")? else {
            return Ok(());
        };

        let result = GlyphDraft::new(name, kind, path, size_mb, tag).and_then(|d| self.store.add(d));
        match result {
            Ok(id) => writeln!(self.io.out(), "Added glyph with id {id}."),
            Err(e) => self.report(&e),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.io.out(), "No glyphs stored yet.");
        }

        let out = self.io.out();
        writeln!(out, "\nSearch / Filter")?;
        writeln!(out, "Type 'q' to go back.")?;
        writeln!(out, "1) Search by name (contains)")?;
        writeln!(out, "2) Filter by type")?;
        writeln!(out, "3) Filter by tag (case-insensitive)")?;
        writeln!(out, "0) Back")?;

        let Prompt::Value(mode) = self.io.read_int_in_range("Choose (0-3): ", 0, 3)? else {
            return Ok(());
        };

        let hits = match mode {
            1 => {
                let Prompt::Value(keyword) = self.io.read_non_empty("Keyword: ")? else {
                    return Ok(());
                };
                query::search_by_name(self.store.list(), &keyword)
            }
            2 => {
                let Prompt::Value(text) =
                    self.io.read_non_empty(&format!("Type ({}): ", GlyphType::choices()))?
                else {
                    return Ok(());
                };
                let Ok(kind) = GlyphType::parse(&text) else {
                    return writeln!(self.io.out(), "Unknown type.");
                };
                query::filter_by_type(self.store.list(), kind)
            }
            3 => {
                let Prompt::Value(tag) = self.io.read_non_empty("Tag: ")? else {
                    return Ok(());
                };
                query::filter_by_tag(self.store.list(), &tag)
            }
            _ => return Ok(()),
        };

        render::results(self.io.out(), &hits)
    }

    /// Prompt for an id; negative or zero ids can never match
    fn read_id(&mut self, prompt: &str) -> io::Result<Option<GlyphId>> {
        writeln!(self.io.out(), "Type 'q' to go back.")?;
        let Some(n) = self.io.read_int(prompt)?.value() else {
            return Ok(None);
        };
        Ok(Some(u64::try_from(n).map_or(GlyphId(0), GlyphId)))
    }

    fn remove(&mut self) -> io::Result<()> {
        let Some(id) = self.read_id("Enter glyph id to remove: ")? else {
            return Ok(());
        };
        match self.store.remove(id) {
            Ok(_) => writeln!(self.io.out(), "Removed."),
            Err(e) => self.report(&e),
        }
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(id) = self.read_id("Enter glyph id to update: ")? else {
            return Ok(());
        };
        let Some(current) = self.store.get(id).cloned() else {
            return self.report(&RegistryError::NotFound(id));
        };

        writeln!(self.io.out(), "\nUpdate Glyph [{id}]\nType 'q' to cancel.")?;

        writeln!(self.io.out(), "Current name: {}", current.name)?;
        let Prompt::Value(name) = self.io.read_non_empty("New name: ")? else {
            return Ok(());
        };

        writeln!(self.io.out(), "Current type: {}", current.kind)?;
        let Some(kind) = self.read_type("New type: ")? else {
            return Ok(());
        };

        writeln!(self.io.out(), "Current path: {}", current.path)?;
        let Prompt::Value(path) = self.io.read_non_empty("New path: ")? else {
            return Ok(());
        };
        if !glyph_registry::text::eq_normalized(&path, &current.path) && self.store.path_in_use(&path) {
            writeln!(self.io.out(), "That path is already used. Cancelled.")?;
            return Ok(());
        }

        writeln!(self.io.out(), "Current sizeMB: {}", current.size_mb)?;
        let Prompt::Value(size_mb) = self.io.read_f64_min("New sizeMB (>=0): ", 0.0)? else {
            return Ok(());
        };

        writeln!(self.io.out(), "Current tag: {}", current.tag)?;
        let Prompt::Value(tag) = self.io.read_non_empty("New tag: ")? else {
            return Ok(());
        };

        let result =
            GlyphDraft::new(name, kind, path, size_mb, tag).and_then(|d| self.store.update(id, d));
        match result {
            Ok(()) => writeln!(self.io.out(), "Updated."),
            Err(e) => self.report(&e),
        }
    }

    fn save(&mut self) -> io::Result<()> {
        match self.store.save_to(&self.config.db_path) {
            Ok(()) => writeln!(self.io.out(), "Saved."),
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                writeln!(self.io.out(), "Save failed.")
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let path = self.config.db_path.clone();
        let result = if self.config.strict_load {
            self.store.load_validated_from(&path)
        } else {
            self.store.load_from(&path)
        };
        match result {
            Ok(_) => writeln!(self.io.out(), "Loaded."),
            Err(e) => {
                tracing::error!("Load failed: {}", e);
                writeln!(self.io.out(), "Load failed.")
            }
        }
    }

    /// Turn a registry failure into a user-facing line
    fn report(&mut self, error: &RegistryError) -> io::Result<()> {
        let message = match error {
            RegistryError::NotFound(_) => "Glyph not found.".to_string(),
            RegistryError::DuplicatePath(_) => "That path is already used. Cancelled.".to_string(),
            RegistryError::InvalidType(_) => "Unknown type. Cancelled.".to_string(),
            other => format!("Cancelled: {other}."),
        };
        writeln!(self.io.out(), "{message}")
    }
}
