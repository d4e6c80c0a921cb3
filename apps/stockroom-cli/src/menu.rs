//! # Menu
//!
//! Renders a numbered list of options with optional header, separators and
//! footer.
//!
//! ## Layout
//! ```text
//!                                  (leading blank line)
//! Store Menu                       header         (if set)
//! ----------                       separator      (if top separator on)
//! 1. List all products in store
//! 2. show total amount in store    options, numbered by position
//! 3. Make an order
//! 4. Quit
//!                                  separator      (if bottom separator on)
//! Please choose a number:          footer         (if set, no newline)
//! ```

use std::fmt;

/// The content of a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuLayout {
    pub items: Vec<String>,
    pub header: Option<String>,
    pub separator: Option<String>,
    pub footer: Option<String>,
}

impl MenuLayout {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MenuLayout {
            items: items.into_iter().map(Into::into).collect(),
            ..MenuLayout::default()
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// A renderable menu. The top separator is on by default, the bottom one off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    layout: MenuLayout,
    top_separator: bool,
    bottom_separator: bool,
}

impl Menu {
    pub fn new(layout: MenuLayout) -> Self {
        Menu {
            layout,
            top_separator: true,
            bottom_separator: false,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.layout.items
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.layout.items.push(item.into());
    }

    /// Removes the first item equal to `item`. Returns whether one was found.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.layout.items.iter().position(|i| i == item) {
            Some(index) => {
                self.layout.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.layout.header = Some(header.into());
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.layout.separator = Some(separator.into());
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.layout.footer = Some(footer.into());
    }

    pub fn set_top_separator(&mut self, enable: bool) {
        self.top_separator = enable;
    }

    pub fn set_bottom_separator(&mut self, enable: bool) {
        self.bottom_separator = enable;
    }

    fn write_separator(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.layout.separator {
            Some(separator) => writeln!(f, "{separator}"),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;

        if let Some(header) = &self.layout.header {
            writeln!(f, "{header}")?;
        }

        if self.top_separator {
            self.write_separator(f)?;
        }

        let options: Vec<String> = self
            .layout
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect();
        writeln!(f, "{}", options.join("\n"))?;

        if self.bottom_separator {
            self.write_separator(f)?;
        }

        if let Some(footer) = &self.layout.footer {
            write!(f, "{footer}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Menu {
        Menu::new(
            MenuLayout::new(["List", "Quit"])
                .header("Store Menu")
                .separator("---")
                .footer("Choose: "),
        )
    }

    #[test]
    fn test_render_full_layout() {
        assert_eq!(
            sample().to_string(),
            "\nStore Menu\n---\n1. List\n2. Quit\nChoose: "
        );
    }

    #[test]
    fn test_render_bare_items() {
        let menu = Menu::new(MenuLayout::new(["Only"]));
        assert_eq!(menu.to_string(), "\n1. Only\n");
    }

    #[test]
    fn test_separator_toggles() {
        let mut menu = sample();
        menu.set_top_separator(false);
        menu.set_bottom_separator(true);
        assert_eq!(
            menu.to_string(),
            "\nStore Menu\n1. List\n2. Quit\n---\nChoose: "
        );
    }

    #[test]
    fn test_add_and_remove_items_renumber() {
        let mut menu = sample();
        menu.add_item("Help");
        assert!(menu.remove_item("List"));
        assert!(!menu.remove_item("Missing"));

        assert_eq!(menu.items(), ["Quit", "Help"]);
        assert!(menu.to_string().contains("1. Quit\n2. Help\n"));
    }

    #[test]
    fn test_setters() {
        let mut menu = Menu::new(MenuLayout::new(["A"]));
        menu.set_header("Head");
        menu.set_separator("==");
        menu.set_footer("> ");
        assert_eq!(menu.to_string(), "\nHead\n==\n1. A\n> ");
    }
}
