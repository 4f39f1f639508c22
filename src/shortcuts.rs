use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Slash,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Focus the search input and select its text.
    FocusSearch,
    /// Open the first visible card.
    ActivateFirstVisible,
}

impl ShortcutKey {
    /// Map a raw input event onto a shortcut key, if it is one.
    pub fn from_event(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::Text(text) if text == "/" => Some(ShortcutKey::Slash),
            egui::Event::Key {
                key: egui::Key::Slash,
                pressed: true,
                modifiers,
                ..
            } if modifiers.is_none() => Some(ShortcutKey::Slash),
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => Some(ShortcutKey::Enter),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShortcutHandler;

impl ShortcutHandler {
    pub fn on_key(&self, key: ShortcutKey, search_focused: bool) -> Option<Shortcut> {
        match key {
            ShortcutKey::Slash if !search_focused => Some(Shortcut::FocusSearch),
            ShortcutKey::Enter if search_focused => Some(Shortcut::ActivateFirstVisible),
            _ => None,
        }
    }

    /// Scan this frame's input for shortcuts. A `/` that triggers
    /// [`Shortcut::FocusSearch`] is removed from the input so it is never
    /// typed into the search box.
    pub fn process(&self, ctx: &egui::Context, search_focused: bool) -> Vec<Shortcut> {
        ctx.input_mut(|i| {
            let mut fired = Vec::new();
            i.events.retain(|event| {
                let Some(key) = ShortcutKey::from_event(event) else {
                    return true;
                };
                match self.on_key(key, search_focused) {
                    Some(shortcut) => {
                        if !fired.contains(&shortcut) {
                            fired.push(shortcut);
                        }
                        shortcut != Shortcut::FocusSearch
                    }
                    None => true,
                }
            });
            fired
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_focuses_search_only_when_unfocused() {
        let handler = ShortcutHandler;
        assert_eq!(
            handler.on_key(ShortcutKey::Slash, false),
            Some(Shortcut::FocusSearch)
        );
        assert_eq!(handler.on_key(ShortcutKey::Slash, true), None);
    }

    #[test]
    fn enter_activates_only_from_search() {
        let handler = ShortcutHandler;
        assert_eq!(
            handler.on_key(ShortcutKey::Enter, true),
            Some(Shortcut::ActivateFirstVisible)
        );
        assert_eq!(handler.on_key(ShortcutKey::Enter, false), None);
    }

    #[test]
    fn maps_text_and_key_events() {
        assert_eq!(
            ShortcutKey::from_event(&egui::Event::Text("/".into())),
            Some(ShortcutKey::Slash)
        );
        assert_eq!(ShortcutKey::from_event(&egui::Event::Text("a".into())), None);
    }

    #[test]
    fn process_swallows_slash_text() {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![
                egui::Event::Text("/".into()),
                egui::Event::Text("x".into()),
            ],
            ..Default::default()
        };
        let mut fired = Vec::new();
        let mut remaining = Vec::new();
        let _ = ctx.run(input, |ctx| {
            fired = ShortcutHandler.process(ctx, false);
            remaining = ctx.input(|i| i.events.clone());
        });
        assert_eq!(fired, vec![Shortcut::FocusSearch]);
        assert_eq!(remaining, vec![egui::Event::Text("x".into())]);
    }
}
