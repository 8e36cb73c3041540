use serde_json::Value;

/// JSON key holding the list of object states
pub const OBJECT_STATES_KEY: &str = "ObjectStates";
/// JSON key holding the cards inside a state
pub const CONTAINED_OBJECTS_KEY: &str = "ContainedObjects";
/// JSON key holding a card's display name
pub const NICKNAME_KEY: &str = "Nickname";

/// The part of a Tabletop Simulator saved object that the tally reads.
///
/// Every level is optional. A container field that is missing, or present with
/// the wrong JSON type, is modelled as `None` so traversal never fails. Everything
/// else in the document is opaque payload and is not captured here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decklist {
    pub object_states: Option<Vec<ObjectState>>,
}

/// One entry of `ObjectStates`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectState {
    pub contained_objects: Option<Vec<Card>>,
}

/// One entry of `ContainedObjects`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// Present whenever the card has a `Nickname` key. Non-string values are
    /// kept as their JSON text (`3`, `null`).
    pub nickname: Option<String>,
}

impl Decklist {
    /// Extract the decklist schema from a parsed JSON document.
    pub fn from_value(document: &Value) -> Self {
        Self {
            object_states: array_field(document, OBJECT_STATES_KEY)
                .map(|states| states.iter().map(ObjectState::from_value).collect()),
        }
    }

    /// Iterate over every card in every state, in document order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.object_states
            .iter()
            .flatten()
            .filter_map(|state| state.contained_objects.as_ref())
            .flatten()
    }
}

impl ObjectState {
    pub fn from_value(state: &Value) -> Self {
        Self {
            contained_objects: array_field(state, CONTAINED_OBJECTS_KEY)
                .map(|cards| cards.iter().map(Card::from_value).collect()),
        }
    }
}

impl Card {
    pub fn from_value(card: &Value) -> Self {
        Self {
            nickname: card.get(NICKNAME_KEY).map(|nickname| match nickname {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            }),
        }
    }
}

impl From<&Value> for Decklist {
    fn from(document: &Value) -> Self {
        Self::from_value(document)
    }
}

/// `value[key]` if `value` is an object and the field is an array
fn array_field<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    value.get(key).and_then(Value::as_array)
}
