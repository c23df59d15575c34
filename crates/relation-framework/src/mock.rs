//! # Mock Relation Client
//!
//! `MockClient<P, C>` hands out a real [`RelationClient`] whose requests are answered from
//! a queue of expectations instead of a [`RelationActor`](crate::RelationActor). Use it to
//! test code that sits *on top of* a relation group (request handlers, orchestration)
//! and to inject failures that a real actor would not produce on demand.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real parent/child maps |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | `return_err(...)` | Requires a broken actor |
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Address, Letting>::new();
//! mock.expect_list_children().return_err(FrameworkError::ActorClosed);
//!
//! let lettings = LettingsClient::new(mock.client());
//! assert!(lettings.lettings().await.is_err());
//! mock.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation panics inside the mock task, which drops the reply channel; the caller
//! then sees [`FrameworkError::ActorDropped`].

use crate::client::RelationClient;
use crate::entity::{ChildEntity, Linked, ParentEntity};
use crate::error::FrameworkError;
use crate::message::RelationRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    GetChild {
        id: C::Id,
        response: Result<Option<Linked<P, C>>, FrameworkError>,
    },
    FindByKey {
        key: String,
        response: Result<Option<Linked<P, C>>, FrameworkError>,
    },
    ListChildren {
        response: Result<Vec<Linked<P, C>>, FrameworkError>,
    },
    DeleteParent {
        id: P::Id,
        response: Result<Option<C::Id>, FrameworkError>,
    },
}

type Queue<P, C> = Arc<Mutex<VecDeque<Expectation<P, C>>>>;

/// A mock relation group with expectation tracking.
pub struct MockClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    client: RelationClient<P, C>,
    expectations: Queue<P, C>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<P, C> Default for MockClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C> MockClient<P, C>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RelationRequest<P, C>>(100);
        let expectations: Queue<P, C> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        RelationRequest::GetChild { id, respond_to },
                        Some(Expectation::GetChild {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "GetChild called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        RelationRequest::FindByKey { key, respond_to },
                        Some(Expectation::FindByKey {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "FindByKey called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        RelationRequest::ListChildren { respond_to },
                        Some(Expectation::ListChildren { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RelationRequest::DeleteParent { id, respond_to },
                        Some(Expectation::DeleteParent {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "DeleteParent called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: RelationClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> RelationClient<P, C> {
        self.client.clone()
    }

    pub fn expect_get_child(&mut self, id: C::Id) -> ExpectationBuilder<P, C, Option<Linked<P, C>>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::GetChild { id, response }
        })
    }

    pub fn expect_find_by_key(
        &mut self,
        key: impl Into<String>,
    ) -> ExpectationBuilder<P, C, Option<Linked<P, C>>> {
        let key = key.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::FindByKey { key, response }
        })
    }

    pub fn expect_list_children(&mut self) -> ExpectationBuilder<P, C, Vec<Linked<P, C>>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::ListChildren { response }
        })
    }

    pub fn expect_delete_parent(&mut self, id: P::Id) -> ExpectationBuilder<P, C, Option<C::Id>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::DeleteParent { id, response }
        })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Completes an expectation with the response the mock should send back.
pub struct ExpectationBuilder<P, C, R>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    expectations: Queue<P, C>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<P, C> + Send>,
}

impl<P, C, R> ExpectationBuilder<P, C, R>
where
    P: ParentEntity,
    C: ChildEntity<P>,
{
    fn new(
        expectations: Queue<P, C>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<P, C> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Answer the request successfully with `value`.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldRule, FieldValue, Validate};
    use crate::ActorEntity;

    #[derive(Clone, Debug, PartialEq)]
    struct Owner {
        id: u32,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Pet {
        id: u32,
        owner: u32,
    }

    #[derive(Debug)]
    struct OwnerCreate;

    #[derive(Debug)]
    struct PetCreate {
        owner: u32,
    }

    impl Validate for OwnerCreate {
        fn rules() -> &'static [FieldRule] {
            &[]
        }
        fn field(&self, _: &str) -> Option<FieldValue<'_>> {
            None
        }
    }

    impl Validate for PetCreate {
        fn rules() -> &'static [FieldRule] {
            &[]
        }
        fn field(&self, _: &str) -> Option<FieldValue<'_>> {
            None
        }
    }

    impl ActorEntity for Owner {
        type Id = u32;
        type Create = OwnerCreate;
        fn id(&self) -> u32 {
            self.id
        }
        fn from_create_params(id: u32, _: OwnerCreate) -> Self {
            Self { id }
        }
    }

    impl ParentEntity for Owner {}

    impl ActorEntity for Pet {
        type Id = u32;
        type Create = PetCreate;
        fn id(&self) -> u32 {
            self.id
        }
        fn from_create_params(id: u32, params: PetCreate) -> Self {
            Self {
                id,
                owner: params.owner,
            }
        }
    }

    impl ChildEntity<Owner> for Pet {
        fn parent_of(params: &PetCreate) -> u32 {
            params.owner
        }
        fn parent(&self) -> u32 {
            self.owner
        }
    }

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mut mock = MockClient::<Owner, Pet>::new();
        let linked = Linked {
            child: Pet { id: 1, owner: 7 },
            parent: Owner { id: 7 },
        };
        mock.expect_get_child(1).return_ok(Some(linked.clone()));
        mock.expect_list_children()
            .return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        assert_eq!(client.get_child(1).await.unwrap(), Some(linked));
        assert!(matches!(
            client.list_children().await,
            Err(FrameworkError::ActorClosed)
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_request_drops_reply() {
        let mock = MockClient::<Owner, Pet>::new();
        let result = mock.client().find_by_key("nobody").await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mut mock = MockClient::<Owner, Pet>::new();
        mock.expect_delete_parent(3).return_ok(None);
        mock.verify();
    }
}
