//! # vlearn-router
//!
//! Static route table resolver for the vlearn single-page client.
//!
//! A table is declared once at startup as an ordered list of
//! [`RouteDefinition`]s, each binding a literal path and a symbolic name
//! to an opaque view handle. [`Resolver::register`] validates the
//! declaration and freezes it; [`Resolver::resolve`] and
//! [`Resolver::resolve_by_name`] answer navigation requests against the
//! frozen table.
//!
//! ## Matching Model
//!
//! - Exact literal comparison on canonical paths, no patterns
//! - Table order is declaration order; the scan returns the first match
//! - Requests are canonicalized before comparison (`/ast-parse/` →
//!   `/ast-parse`)
//!
//! ## Construction Guarantees
//!
//! - Duplicate paths and duplicate names are rejected with
//!   [`DuplicateRouteError`] before a resolver exists
//! - A built table never changes; lookups take `&self`, so a resolver is
//!   safe to share across threads without locking
//!
//! ## Example
//!
//! ```
//! use vlearn_router::{Resolver, RouteDefinition};
//!
//! let resolver = Resolver::register([
//!     RouteDefinition::new("/", "Home", "views/home"),
//!     RouteDefinition::new("/ast-parse", "ASTParse", "views/ast-parse"),
//! ])
//! .unwrap();
//!
//! assert_eq!(resolver.resolve("/").unwrap().name, "Home");
//! assert_eq!(resolver.resolve_by_name("ASTParse").unwrap().path, "/ast-parse");
//! assert!(resolver.resolve("/unknown").is_err());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod errors;
pub mod path;

pub use config::{RouteDecl, RoutesConfig};
pub use errors::{DuplicateRouteError, NotFoundError};
pub use path::{canonicalize_path, is_canonical_path};

// ============================================================================
// Core Types
// ============================================================================

/// A single route: a literal path and a symbolic name bound to an opaque
/// view handle.
///
/// The resolver never inspects the view handle. Use whatever type the
/// embedding shell dispatches on, such as an enum of screens or a
/// component id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition<V> {
    /// Literal path like "/ast-parse", unique within a table
    pub path: String,
    /// Symbolic identifier for programmatic navigation, unique within a table
    pub name: String,
    /// Opaque handle to the renderable unit mounted on a match
    pub view: V,
}

impl<V> RouteDefinition<V> {
    /// Creates a definition from a path, a name, and a view handle
    ///
    /// # Examples
    ///
    /// ```
    /// use vlearn_router::RouteDefinition;
    ///
    /// let home = RouteDefinition::new("/", "Home", "views/home");
    /// assert_eq!(home.path, "/");
    /// assert_eq!(home.name, "Home");
    /// ```
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

// ============================================================================
// Resolver Implementation
// ============================================================================

/// Immutable route table plus its lookup operations
///
/// Built once from a finite declaration via [`Resolver::register`];
/// afterwards the table cannot change. The resolver owns its definitions
/// exclusively and lookups are pure functions of the table and the
/// query. There is no inner mutability, so `Resolver<V>` is
/// `Send + Sync` whenever `V` is and shared references are all
/// concurrent readers need.
#[derive(Debug, Clone)]
pub struct Resolver<V> {
    routes: Vec<RouteDefinition<V>>,
}

impl<V> Resolver<V> {
    /// Builds an immutable resolver from a finite route declaration
    ///
    /// Declared paths are canonicalized before validation, so `/about`
    /// and `/about/` count as the same path. Fails with
    /// [`DuplicateRouteError`] when two declarations share a canonical
    /// path or a name; the error reports the first collision in
    /// declaration order, and a declaration colliding on both fields
    /// reports the path. The error is meant to abort startup.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlearn_router::{Resolver, RouteDefinition};
    ///
    /// let resolver = Resolver::register([
    ///     RouteDefinition::new("/", "Home", "views/home"),
    ///     RouteDefinition::new("/ast-parse", "ASTParse", "views/ast-parse"),
    /// ])
    /// .unwrap();
    /// assert_eq!(resolver.len(), 2);
    ///
    /// // Two declarations for the same path never build a resolver
    /// let result = Resolver::register([
    ///     RouteDefinition::new("/", "Home", "views/home"),
    ///     RouteDefinition::new("/", "Landing", "views/landing"),
    /// ]);
    /// assert!(result.is_err());
    /// ```
    pub fn register<I>(definitions: I) -> Result<Self, DuplicateRouteError>
    where
        I: IntoIterator<Item = RouteDefinition<V>>,
    {
        let mut routes: Vec<RouteDefinition<V>> = Vec::new();

        for mut definition in definitions {
            if !is_canonical_path(&definition.path) {
                let canonical = canonicalize_path(&definition.path).into_owned();
                definition.path = canonical;
            }

            if let Some(existing) = routes.iter().find(|route| route.path == definition.path) {
                return Err(DuplicateRouteError::Path {
                    path: definition.path,
                    first: existing.name.clone(),
                    second: definition.name,
                });
            }

            if let Some(existing) = routes.iter().find(|route| route.name == definition.name) {
                return Err(DuplicateRouteError::Name {
                    name: definition.name,
                    first: existing.path.clone(),
                    second: definition.path,
                });
            }

            routes.push(definition);
        }

        tracing::debug!("route table built with {} entries", routes.len());

        Ok(Self { routes })
    }

    /// Resolves a requested path to its route definition
    ///
    /// The request is canonicalized, then the table is scanned in
    /// declaration order for an entry whose path equals it. No pattern
    /// matching: a request either names a declared path or it misses.
    /// A miss is an ordinary outcome returned as a value, not a fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlearn_router::{Resolver, RouteDefinition};
    ///
    /// let resolver = Resolver::register([
    ///     RouteDefinition::new("/", "Home", "views/home"),
    ///     RouteDefinition::new("/ast-parse", "ASTParse", "views/ast-parse"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(resolver.resolve("/").unwrap().name, "Home");
    /// assert_eq!(resolver.resolve("/ast-parse/").unwrap().name, "ASTParse");
    /// assert!(resolver.resolve("/unknown").is_err());
    /// ```
    pub fn resolve(&self, requested: &str) -> Result<&RouteDefinition<V>, NotFoundError> {
        let requested = canonicalize_path(requested);

        self.routes
            .iter()
            .find(|route| route.path == requested)
            .ok_or_else(|| {
                tracing::debug!("no route matches path {:?}", requested);
                NotFoundError::Path(requested.into_owned())
            })
    }

    /// Resolves a symbolic name to its route definition
    ///
    /// Mirror of [`Resolver::resolve`] keyed by name instead of path, for
    /// programmatic navigation. Names are compared verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use vlearn_router::{Resolver, RouteDefinition};
    ///
    /// let resolver = Resolver::register([
    ///     RouteDefinition::new("/ast-parse", "ASTParse", "views/ast-parse"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(resolver.resolve_by_name("ASTParse").unwrap().path, "/ast-parse");
    /// assert!(resolver.resolve_by_name("Unknown").is_err());
    /// ```
    pub fn resolve_by_name(&self, name: &str) -> Result<&RouteDefinition<V>, NotFoundError> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| {
                tracing::debug!("no route named {:?}", name);
                NotFoundError::Name(name.to_string())
            })
    }

    /// Declared routes in table order
    ///
    /// # Examples
    ///
    /// ```
    /// use vlearn_router::{Resolver, RouteDefinition};
    ///
    /// let resolver = Resolver::register([
    ///     RouteDefinition::new("/", "Home", ()),
    ///     RouteDefinition::new("/ast-parse", "ASTParse", ()),
    /// ])
    /// .unwrap();
    ///
    /// let names: Vec<&str> = resolver.routes().iter().map(|r| r.name.as_str()).collect();
    /// assert_eq!(names, vec!["Home", "ASTParse"]);
    /// ```
    pub fn routes(&self) -> &[RouteDefinition<V>] {
        &self.routes
    }

    /// Number of declared routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates the table in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition<V>> {
        self.routes.iter()
    }
}

impl<'a, V> IntoIterator for &'a Resolver<V> {
    type Item = &'a RouteDefinition<V>;
    type IntoIter = std::slice::Iter<'a, RouteDefinition<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
