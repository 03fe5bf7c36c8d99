use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::middleware::Handler;

struct Route {
    method: Method,
    path: String,
    handler: Box<dyn Handler>,
}

/// Dispatches requests by exact path and method.
///
/// An unknown path gets 404 Not Found; a known path requested with an
/// unregistered method gets 405 Method Not Allowed.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `method` requests to `path`. A later
    /// registration for the same method and path wins.
    pub fn route(self, method: Method, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.route_boxed(method, path, Box::new(handler))
    }

    /// Like [`Router::route`] for handlers chosen at runtime.
    pub fn route_boxed(mut self, method: Method, path: impl Into<String>, handler: Box<dyn Handler>) -> Self {
        let path = path.into();
        self.routes.retain(|r| !(r.method == method && r.path == path));
        self.routes.push(Route {
            method,
            path,
            handler,
        });
        self
    }

    pub fn get(self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.route(Method::GET, path, handler)
    }
}

impl Handler for Router {
    fn handle(&self, request: &Request) -> Response {
        let path = request.path_only();

        let mut path_known = false;
        for route in self.routes.iter().filter(|r| r.path == path) {
            if route.method == request.method {
                return route.handler.handle(request);
            }
            path_known = true;
        }

        if path_known {
            Response::method_not_allowed()
        } else {
            Response::not_found()
        }
    }
}
