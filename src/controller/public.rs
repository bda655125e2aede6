//! Public site actions

use super::{PublicAction, Reply};
use crate::config::AppState;
use crate::content::ContentKind;
use crate::handler::RequestContext;
use crate::pagination::{parse_page_number, select_items};
use crate::routing::Params;
use crate::view::{self, LinkParams};

const FULL_VIEW: &str = "full";
/// Items per section on the home page
const HOME_RECENT: usize = 3;

pub fn dispatch(
    action: PublicAction,
    params: &Params,
    ctx: &RequestContext,
    state: &AppState,
) -> Reply {
    match action {
        PublicAction::HomeIndex => home(state),
        PublicAction::ArticlesIndex => {
            listing(ContentKind::Article, "Articles", "/articles", ctx, state)
        }
        PublicAction::PhotobooksIndex => {
            listing(ContentKind::Photobook, "Photobooks", "/photobooks", ctx, state)
        }
        PublicAction::ArticlesShow => show(ContentKind::Article, false, params, ctx, state),
        PublicAction::PhotobooksShow => show(ContentKind::Photobook, true, params, ctx, state),
        PublicAction::PagesShow => show(ContentKind::Page, true, params, ctx, state),
    }
}

fn home(state: &AppState) -> Reply {
    Reply::ok(view::render_home(
        &state.content.recent(ContentKind::Article, HOME_RECENT),
        &state.content.recent(ContentKind::Photobook, HOME_RECENT),
    ))
}

fn listing(
    kind: ContentKind,
    heading: &str,
    base: &str,
    ctx: &RequestContext,
    state: &AppState,
) -> Reply {
    let content = &state.config.content;
    let records = state.content.published(kind);
    let requested = parse_page_number(ctx.query_param(&content.list_page_param).as_deref());
    let selection = select_items(&records, content.items_per_page, requested);

    Reply::ok(view::render_listing(
        heading,
        base,
        &selection,
        &content.list_page_param,
    ))
}

/// Show one page of a record, or all of it when `full_view` is allowed and
/// asked for with `?view=full`
fn show(
    kind: ContentKind,
    full_view: bool,
    params: &Params,
    ctx: &RequestContext,
    state: &AppState,
) -> Reply {
    let Some(record) = params
        .get("alias")
        .and_then(|alias| state.content.find_published(kind, alias))
    else {
        return Reply::not_found();
    };
    let content = &state.config.content;

    if full_view && ctx.query_param(&content.view_param).as_deref() == Some(FULL_VIEW) {
        return Reply::ok(view::render_full(record, &state.paginator.full(&record.body)));
    }

    let requested = parse_page_number(ctx.query_param(&content.page_param).as_deref());
    let page = record.page(&state.paginator, requested);
    let links = LinkParams {
        page_param: &content.page_param,
        view_param: &content.view_param,
    };
    Reply::ok(view::render_record(record, &page, &links, full_view))
}
