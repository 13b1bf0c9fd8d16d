//! Cart state and the command-driven store that owns it.
//!
//! [`CartState::apply`] is a pure transition: it takes the current state and a
//! [`CartCommand`] and returns the next state. [`CartStore`] wraps one state,
//! applies dispatched commands and tells subscribers about every change.
//!
//! Commands that name an unknown line item are ignored. Quantities never drop
//! below 1; removal is always explicit.

use serde::{Deserialize, Serialize};

use crate::types::{LineItem, LineItemId, SubscriptionId};

/// A store mutation intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "item", rename_all = "snake_case")]
pub enum CartCommand {
    /// Append an item, or add its quantity to an existing line with the same id.
    Add(LineItem),
    Remove(LineItemId),
    IncrementQuantity(LineItemId),
    DecrementQuantity(LineItemId),
}

impl CartCommand {
    /// Id of the line the command targets.
    #[must_use]
    pub const fn target(&self) -> &LineItemId {
        match self {
            Self::Add(item) => item.id(),
            Self::Remove(id) | Self::IncrementQuantity(id) | Self::DecrementQuantity(id) => id,
        }
    }
}

/// Ordered cart contents.
///
/// Serializes as a plain list of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct CartState {
    items: Vec<LineItem>,
}

impl From<Vec<LineItem>> for CartState {
    fn from(items: Vec<LineItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<CartState> for Vec<LineItem> {
    fn from(state: CartState) -> Self {
        state.items
    }
}

impl CartState {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a state from items in display order.
    ///
    /// Lines sharing an id are merged into the first occurrence.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        items
            .into_iter()
            .fold(Self::new(), |state, item| state.apply(CartCommand::Add(item)))
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .fold(0_u64, |acc, item| acc.saturating_add(u64::from(item.quantity())))
    }

    /// Apply a command and return the resulting state.
    #[must_use]
    pub fn apply(mut self, command: CartCommand) -> Self {
        match command {
            CartCommand::Add(item) => {
                if let Some(existing) = self.items.iter_mut().find(|line| line.id() == item.id()) {
                    let quantity = existing.quantity().saturating_add(item.quantity());
                    existing.set_quantity(quantity);
                } else {
                    self.items.push(item);
                }
            }
            CartCommand::Remove(id) => {
                self.items.retain(|item| item.id() != &id);
            }
            CartCommand::IncrementQuantity(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id() == &id) {
                    let quantity = item.quantity().saturating_add(1);
                    item.set_quantity(quantity);
                }
            }
            CartCommand::DecrementQuantity(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id() == &id) {
                    let quantity = item.quantity().saturating_sub(1);
                    item.set_quantity(quantity);
                }
            }
        }
        self
    }
}

type Listener = Box<dyn FnMut(&CartState)>;

/// Owns the cart state and fans changes out to subscribers.
///
/// Listeners run synchronously after each dispatch, in subscription order.
#[derive(Default)]
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    #[must_use]
    pub fn new(state: CartState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply a command and notify subscribers.
    pub fn dispatch(&mut self, command: CartCommand) {
        if self.state.get(command.target()).is_none() && !matches!(command, CartCommand::Add(_)) {
            tracing::warn!(target_id = %command.target(), "ignoring cart command for unknown item");
        } else {
            tracing::debug!(?command, "applying cart command");
        }

        let state = std::mem::take(&mut self.state);
        self.state = state.apply(command);

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Register a listener called with the new state after every dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription = self.next_subscription.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rust_decimal::Decimal;

    use super::*;

    fn item(id: &str, quantity: u32) -> LineItem {
        LineItem::new(id, id, Decimal::new(1999, 2), quantity).unwrap()
    }

    fn id(s: &str) -> LineItemId {
        LineItemId::from(s)
    }

    #[test]
    fn test_empty_state() {
        let state = CartState::new();
        assert!(state.is_empty());
        assert_eq!(state.total_quantity(), 0);
    }

    #[test]
    fn test_add_appends_in_order() {
        let state = CartState::new()
            .apply(CartCommand::Add(item("b", 1)))
            .apply(CartCommand::Add(item("a", 2)));
        let ids: Vec<_> = state.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(state.total_quantity(), 3);
    }

    #[test]
    fn test_add_merges_existing_line() {
        let state = CartState::from_items([item("a", 1), item("b", 1), item("a", 2)]);
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.get(&id("a")).unwrap().quantity(), 3);
    }

    #[test]
    fn test_increment_and_decrement() {
        let state = CartState::from_items([item("a", 1)])
            .apply(CartCommand::IncrementQuantity(id("a")))
            .apply(CartCommand::IncrementQuantity(id("a")));
        assert_eq!(state.get(&id("a")).unwrap().quantity(), 3);

        let state = state.apply(CartCommand::DecrementQuantity(id("a")));
        assert_eq!(state.get(&id("a")).unwrap().quantity(), 2);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let state = CartState::from_items([item("a", 1)]).apply(CartCommand::DecrementQuantity(id("a")));
        assert_eq!(state.get(&id("a")).unwrap().quantity(), 1);
    }

    #[test]
    fn test_increment_saturates() {
        let state =
            CartState::from_items([item("a", u32::MAX)]).apply(CartCommand::IncrementQuantity(id("a")));
        assert_eq!(state.get(&id("a")).unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_remove() {
        let state = CartState::from_items([item("a", 1), item("b", 1)]).apply(CartCommand::Remove(id("a")));
        assert!(state.get(&id("a")).is_none());
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let before = CartState::from_items([item("a", 2)]);
        for command in [
            CartCommand::Remove(id("zzz")),
            CartCommand::IncrementQuantity(id("zzz")),
            CartCommand::DecrementQuantity(id("zzz")),
        ] {
            assert_eq!(before.clone().apply(command), before);
        }
    }

    #[test]
    fn test_store_notifies_subscribers_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::new(CartState::from_items([item("a", 1)]));

        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |state| sink.borrow_mut().push(state.total_quantity()));

        store.dispatch(CartCommand::IncrementQuantity(id("a")));
        store.dispatch(CartCommand::Add(item("b", 4)));
        assert!(store.unsubscribe(sub));
        store.dispatch(CartCommand::Remove(id("a")));

        assert_eq!(*seen.borrow(), vec![2, 6]);
        assert_eq!(store.state().total_quantity(), 4);
        assert!(!store.unsubscribe(sub));
    }

    #[test]
    fn test_store_notifies_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::default();

        let first = Rc::clone(&order);
        let a = store.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        let b = store.subscribe(move |_| second.borrow_mut().push("second"));
        assert_ne!(a, b);

        store.dispatch(CartCommand::Add(item("a", 1)));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_state_deserialize_merges_duplicates() {
        let state: CartState = serde_json::from_str(
            r#"[{"id":"a","name":"A","price":"1.00","quantity":1},
                {"id":"a","name":"A","price":"1.00","quantity":2}]"#,
        )
        .unwrap();
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.total_quantity(), 3);
    }

    #[test]
    fn test_command_serde_shape() {
        let json = serde_json::to_value(CartCommand::Remove(id("a"))).unwrap();
        assert_eq!(json, serde_json::json!({"command": "remove", "item": "a"}));
    }
}
