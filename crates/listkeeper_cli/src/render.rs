//! Plain-text views for the CLI request layer.

use listkeeper_core::{
    list_class, progress, sorted_items, sorted_lists, Collection, Flash, MinimalResponse,
    Outcome, Route,
};
use std::io::{self, Write};

/// Prints minimal replies and returns the view to render afterwards, if any.
pub fn outcome_view(outcome: Outcome, out: &mut impl Write) -> io::Result<Option<Route>> {
    match outcome {
        Outcome::Redirect(route) | Outcome::Rerender(route) => Ok(match route {
            Route::Lists | Route::List(_) => Some(route),
            Route::NewList | Route::EditList(_) => None,
        }),
        Outcome::Minimal(MinimalResponse::NoContent) => {
            writeln!(out, "204 No Content")?;
            Ok(None)
        }
        Outcome::Minimal(MinimalResponse::Location(route)) => {
            writeln!(out, "{route}")?;
            Ok(None)
        }
    }
}

pub fn flash_line(flash: &Flash) -> String {
    match flash {
        Flash::Success(message) => format!("[ok] {message}"),
        Flash::Error(message) => format!("[error] {message}"),
    }
}

pub fn route(collection: &Collection, route: Route, out: &mut impl Write) -> io::Result<()> {
    match route {
        Route::Lists => lists(collection, out),
        Route::List(list_id) => match collection.get_list(list_id) {
            Ok(list) => {
                writeln!(out, "#{} {} ({})", list.id(), list.name(), progress(list))?;
                for placed in sorted_items(list.items()) {
                    let mark = if placed.entry.is_completed() { "x" } else { " " };
                    writeln!(out, "  [{mark}] {}. {}", placed.id, placed.entry.name())?;
                }
                Ok(())
            }
            Err(err) => writeln!(out, "[error] {err}"),
        },
        Route::NewList | Route::EditList(_) => Ok(()),
    }
}

fn lists(collection: &Collection, out: &mut impl Write) -> io::Result<()> {
    if collection.list_all().is_empty() {
        return writeln!(out, "No lists yet.");
    }
    for placed in sorted_lists(collection.list_all()) {
        let suffix = list_class(placed.entry)
            .map(|class| format!(" [{class}]"))
            .unwrap_or_default();
        writeln!(
            out,
            "#{} {} ({}){suffix}",
            placed.id,
            placed.entry.name(),
            progress(placed.entry)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{flash_line, outcome_view, route};
    use listkeeper_core::{
        Collection, Flash, ItemId, ListId, MinimalResponse, Outcome, Route,
    };

    fn render(collection: &Collection, target: Route) -> String {
        let mut out = Vec::new();
        route(collection, target, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_view_orders_complete_last() {
        let mut collection = Collection::new();
        let done = collection.create_list("Done").unwrap();
        collection.create_list("Open").unwrap();
        collection.add_item(done, "only").unwrap();
        collection.toggle_item(done, ItemId(1), true).unwrap();

        assert_eq!(
            render(&collection, Route::Lists),
            "#2 Open (0 / 0)\n#1 Done (1 / 1) [complete]\n"
        );
    }

    #[test]
    fn list_view_shows_items_incomplete_first() {
        let mut collection = Collection::new();
        let list_id = collection.create_list("Groceries").unwrap();
        let milk = collection.add_item(list_id, "Milk").unwrap();
        collection.add_item(list_id, "Eggs").unwrap();
        collection.toggle_item(list_id, milk, true).unwrap();

        assert_eq!(
            render(&collection, Route::List(list_id)),
            "#1 Groceries (1 / 2)\n  [ ] 2. Eggs\n  [x] 1. Milk\n"
        );
    }

    #[test]
    fn missing_list_view_reports_error() {
        let collection = Collection::new();
        assert_eq!(
            render(&collection, Route::List(ListId(3))),
            "[error] list not found: 3\n"
        );
    }

    #[test]
    fn minimal_outcomes_print_status_and_skip_view() {
        let mut out = Vec::new();
        let view = outcome_view(Outcome::Minimal(MinimalResponse::NoContent), &mut out).unwrap();
        assert_eq!(view, None);
        assert_eq!(String::from_utf8(out).unwrap(), "204 No Content\n");

        let mut out = Vec::new();
        let view = outcome_view(Outcome::Redirect(Route::Lists), &mut out).unwrap();
        assert_eq!(view, Some(Route::Lists));
        assert!(out.is_empty());
    }

    #[test]
    fn flash_lines_are_tagged() {
        assert_eq!(flash_line(&Flash::success("done")), "[ok] done");
        assert_eq!(flash_line(&Flash::error("nope")), "[error] nope");
    }
}
