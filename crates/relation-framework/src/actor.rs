//! # Relation Actor
//!
//! The `RelationActor` owns both sides of a one-to-one relation and processes every
//! request sequentially. Each request is handled by a synchronous method that either
//! applies all of its changes or none of them before the next message is received.
//! That gives every operation transaction semantics without any locks:
//!
//! * a create runs its uniqueness check and its insert with no other request in between;
//! * a cascade delete removes the parent and its child before any reader can look;
//! * a linked read sees the child and its parent from the same state.

use crate::client::RelationClient;
use crate::entity::{entity_name, ChildEntity, Linked, ParentEntity};
use crate::error::FrameworkError;
use crate::message::RelationRequest;
use crate::validation::validate;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that manages one relation group (parent store + child store).
///
/// # Usage Pattern
///
/// 1.  **Create**: `RelationActor::new()` returns the actor and a cloneable client.
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: share the client; drop every clone to stop the actor.
///
/// # State
///
/// * `parents` / `children` are keyed by id. Ids come from increasing counters, so map
///   order is insertion order.
/// * `links` maps a parent id to the id of the child referencing it. It is the
///   one-to-one index: a parent present in `links` cannot take another child.
/// * `keys` maps a parent's natural key to its id.
pub struct RelationActor<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    receiver: mpsc::Receiver<RelationRequest<P, C>>,
    parents: BTreeMap<P::Id, P>,
    children: BTreeMap<C::Id, C>,
    links: HashMap<P::Id, C::Id>,
    keys: HashMap<String, P::Id>,
    next_parent_id: u32,
    next_child_id: u32,
}

impl<P, C> RelationActor<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    /// Creates a new `RelationActor` and its associated `RelationClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, RelationClient<P, C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            parents: BTreeMap::new(),
            children: BTreeMap::new(),
            links: HashMap::new(),
            keys: HashMap::new(),
            next_parent_id: 1,
            next_child_id: 1,
        };
        (actor, RelationClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let parent_type = entity_name::<P>();
        let child_type = entity_name::<C>();
        info!(parent_type, child_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            parent_type,
            child_type,
            parents = self.parents.len(),
            children = self.children.len(),
            "Shutdown"
        );
    }

    fn handle(&mut self, msg: RelationRequest<P, C>) {
        match msg {
            RelationRequest::CreateParent { params, respond_to } => {
                let _ = respond_to.send(self.create_parent(params));
            }
            RelationRequest::CreateChild { params, respond_to } => {
                let _ = respond_to.send(self.create_child(params));
            }
            RelationRequest::GetParent { id, respond_to } => {
                let item = self.parents.get(&id).cloned();
                let found = item.is_some();
                debug!(entity_type = entity_name::<P>(), %id, found, "Get");
                let _ = respond_to.send(Ok(item));
            }
            RelationRequest::GetChild { id, respond_to } => {
                let result = match self.children.get(&id) {
                    Some(child) => self.link(child).map(Some),
                    None => Ok(None),
                };
                let found = matches!(result, Ok(Some(_)));
                debug!(entity_type = entity_name::<C>(), %id, found, "Get");
                let _ = respond_to.send(result);
            }
            RelationRequest::FindByKey { key, respond_to } => {
                let result = self.find_by_key(&key);
                let found = matches!(result, Ok(Some(_)));
                debug!(entity_type = entity_name::<C>(), %key, found, "FindByKey");
                let _ = respond_to.send(result);
            }
            RelationRequest::ListParents { respond_to } => {
                let items = self.list_parents();
                debug!(entity_type = entity_name::<P>(), count = items.len(), "List");
                let _ = respond_to.send(Ok(items));
            }
            RelationRequest::ListChildren { respond_to } => {
                let result = self.list_children();
                debug!(entity_type = entity_name::<C>(), ok = result.is_ok(), "List");
                let _ = respond_to.send(result);
            }
            RelationRequest::DeleteParent { id, respond_to } => {
                let _ = respond_to.send(self.delete_parent(id));
            }
            RelationRequest::DeleteChild { id, respond_to } => {
                let _ = respond_to.send(self.delete_child(id));
            }
        }
    }

    fn create_parent(&mut self, params: P::Create) -> Result<P::Id, FrameworkError> {
        let entity_type = entity_name::<P>();
        debug!(entity_type, ?params, "Create");

        if let Err(errors) = validate(&params) {
            warn!(entity_type, error = %errors, "Create rejected");
            return Err(errors.into());
        }

        let id = P::Id::from(self.next_parent_id);
        let item = P::from_create_params(id, params);

        if let Some(key) = item.natural_key() {
            if self.keys.contains_key(key) {
                warn!(entity_type, %key, "Duplicate natural key");
                return Err(FrameworkError::conflict(entity_type, key));
            }
            self.keys.insert(key.to_string(), id);
        }

        self.next_parent_id += 1;
        self.parents.insert(id, item);
        info!(entity_type, %id, size = self.parents.len(), "Created");
        Ok(id)
    }

    fn create_child(&mut self, params: C::Create) -> Result<C::Id, FrameworkError> {
        let entity_type = entity_name::<C>();
        debug!(entity_type, ?params, "Create");

        if let Err(errors) = validate(&params) {
            warn!(entity_type, error = %errors, "Create rejected");
            return Err(errors.into());
        }

        let parent_id = C::parent_of(&params);
        if !self.parents.contains_key(&parent_id) {
            warn!(entity_type, parent = %parent_id, "Parent not found");
            return Err(FrameworkError::not_found(entity_name::<P>(), parent_id));
        }
        if let Some(existing) = self.links.get(&parent_id) {
            warn!(entity_type, parent = %parent_id, %existing, "Parent already linked");
            return Err(FrameworkError::conflict(
                entity_type,
                format!("{} {}", entity_name::<P>(), parent_id),
            ));
        }

        let id = C::Id::from(self.next_child_id);
        self.next_child_id += 1;
        self.children.insert(id, C::from_create_params(id, params));
        self.links.insert(parent_id, id);
        info!(entity_type, %id, parent = %parent_id, size = self.children.len(), "Created");
        Ok(id)
    }

    fn link(&self, child: &C) -> Result<Linked<P, C>, FrameworkError> {
        match self.parents.get(&child.parent()) {
            Some(parent) => Ok(Linked {
                child: child.clone(),
                parent: parent.clone(),
            }),
            None => Err(FrameworkError::DanglingLink {
                kind: entity_name::<C>(),
                id: child.id().to_string(),
            }),
        }
    }

    fn find_by_key(&self, key: &str) -> Result<Option<Linked<P, C>>, FrameworkError> {
        let Some(child_id) = self
            .keys
            .get(key)
            .and_then(|parent_id| self.links.get(parent_id))
        else {
            return Ok(None);
        };
        match self.children.get(child_id) {
            Some(child) => self.link(child).map(Some),
            None => Ok(None),
        }
    }

    fn list_parents(&self) -> Vec<P> {
        let mut items: Vec<P> = self.parents.values().cloned().collect();
        items.sort_by(|a, b| a.list_order(b));
        items
    }

    fn list_children(&self) -> Result<Vec<Linked<P, C>>, FrameworkError> {
        let mut items = self
            .children
            .values()
            .map(|child| self.link(child))
            .collect::<Result<Vec<_>, _>>()?;
        items.sort_by(|a, b| a.child.list_order(&b.child));
        Ok(items)
    }

    fn delete_parent(&mut self, id: P::Id) -> Result<Option<C::Id>, FrameworkError> {
        let entity_type = entity_name::<P>();
        let Some(parent) = self.parents.remove(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::not_found(entity_type, id));
        };

        if let Some(key) = parent.natural_key() {
            self.keys.remove(key);
        }
        let cascaded = self.links.remove(&id);
        if let Some(child_id) = cascaded {
            self.children.remove(&child_id);
            info!(entity_type = entity_name::<C>(), id = %child_id, parent = %id, "Cascade deleted");
        }

        info!(entity_type, %id, size = self.parents.len(), "Deleted");
        Ok(cascaded)
    }

    fn delete_child(&mut self, id: C::Id) -> Result<(), FrameworkError> {
        let entity_type = entity_name::<C>();
        let Some(child) = self.children.remove(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::not_found(entity_type, id));
        };
        self.links.remove(&child.parent());
        info!(entity_type, %id, size = self.children.len(), "Deleted");
        Ok(())
    }
}
