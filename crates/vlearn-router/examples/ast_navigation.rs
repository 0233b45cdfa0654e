// Example: Resolving navigation requests for the vlearn client
//
// Builds the application route table (Home and ASTParse), then walks the
// requests an embedding shell would forward from its navigation source.
// Hits mount their view, a miss falls back, and a programmatic jump by
// name closes the walk.
//
// Run with: cargo run --example ast_navigation

use vlearn_router::{Resolver, RouteDefinition};

// The resolver never looks inside the view handle; the shell dispatches
// on it after a successful resolution.
#[derive(Debug, Clone, Copy)]
enum Screen {
    Home,
    AstParse,
}

fn mount(screen: Screen) {
    match screen {
        Screen::Home => tracing::info!("rendering the workspace landing screen"),
        Screen::AstParse => tracing::info!("rendering the AST parse visualizer"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let resolver = Resolver::register([
        RouteDefinition::new("/", "Home", Screen::Home),
        RouteDefinition::new("/ast-parse", "ASTParse", Screen::AstParse),
    ])?;

    // Requests as a navigation source would forward them
    for requested in ["/", "/ast-parse", "/ast-parse/", "/grammar"] {
        match resolver.resolve(requested) {
            Ok(route) => {
                tracing::info!("{} matched route {}", requested, route.name);
                mount(route.view);
            }
            Err(err) => {
                tracing::warn!("{}; mounting fallback screen", err);
            }
        }
    }

    // Programmatic jump by name
    let target = resolver.resolve_by_name("ASTParse")?;
    tracing::info!("jumping to {} at {}", target.name, target.path);
    mount(target.view);

    Ok(())
}
