use std::{
    io::{self, BufRead, Write},
    sync::Arc,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use client_core::{
    action::{ActionController, ActionState, DocumentForm, SearchController},
    health::{self, spawn_health_monitor},
    view, DocumentClient, HealthView,
};
use shared::{
    domain::{DocumentId, TenantId},
    protocol::{DocumentRecord, SearchResultPage},
};
use tracing::info;

mod config;

/// Terminal front end for the multi-tenant document search service.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the document search service.
    #[arg(long)]
    server_url: Option<String>,
    /// Tenant identifier sent with every document request.
    #[arg(long)]
    tenant: Option<String>,
    /// Results per page.
    #[arg(long)]
    page_size: Option<u32>,
}

fn render_create(state: &ActionState<DocumentRecord>) {
    match state {
        ActionState::Loading => println!("Adding document..."),
        ActionState::Succeeded(doc) => {
            println!("Document added successfully! (id {})", doc.id.0)
        }
        ActionState::Failed(message) => println!("error: {message}"),
        ActionState::Idle => {}
    }
}

fn render_search(state: &ActionState<SearchResultPage>) {
    match state {
        ActionState::Loading => println!("Searching..."),
        ActionState::Succeeded(page) => {
            for line in view::result_lines(page) {
                println!("{line}");
            }
            let strip = view::pagination_line(page);
            if !strip.is_empty() {
                println!("pages: {strip}");
            }
        }
        ActionState::Failed(message) => println!("error: {message}"),
        ActionState::Idle => {}
    }
}

fn render_detail(state: &ActionState<DocumentRecord>) {
    match state {
        ActionState::Loading => println!("Loading..."),
        ActionState::Succeeded(doc) => {
            for line in view::detail_lines(doc) {
                println!("{line}");
            }
        }
        ActionState::Failed(message) => println!("error: {message}"),
        ActionState::Idle => {}
    }
}

fn render_delete(state: &ActionState<()>) {
    match state {
        ActionState::Loading => println!("Deleting..."),
        ActionState::Succeeded(()) => println!("Document deleted."),
        ActionState::Failed(message) => println!("error: {message}"),
        ActionState::Idle => {}
    }
}

fn print_help() {
    println!("commands:");
    println!("  tenant <id>              set the tenant for all document requests");
    println!("  add <title> :: <content> create a document");
    println!("  search <query>           search documents (first page)");
    println!("  page <n>                 jump to page n of the last search");
    println!("  open <id>                show a document");
    println!("  delete <id>              delete a document and refresh the search");
    println!("  health                   probe the backend now");
    println!("  quit");
}

fn parse_document_id(raw: &str) -> Option<DocumentId> {
    raw.trim().parse::<i64>().ok().map(DocumentId)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(v) = args.server_url {
        settings.server_url = config::normalize_server_url(&v);
    }
    if let Some(v) = args.tenant {
        settings.tenant_id = Some(v);
    }
    if let Some(v) = args.page_size {
        settings.page_size = v;
    }

    let client = Arc::new(DocumentClient::new(settings.server_url.clone()));
    let health_rx = spawn_health_monitor(
        Arc::clone(&client),
        Duration::from_secs(settings.health_interval_seconds),
    );

    let mut tenant: Option<TenantId> = match settings.tenant_id.as_deref() {
        Some(raw) => Some(TenantId::new(raw)?),
        None => None,
    };

    info!(server_url = %client.server_url(), "document search client ready");
    print_help();

    let mut form = DocumentForm::default();
    let mut create = ActionController::new(render_create);
    let mut detail = ActionController::new(render_detail);
    let mut delete = ActionController::new(render_delete);
    let mut search = SearchController::new(settings.page_size, render_search);

    let stdin = io::stdin();
    let mut last_health = HealthView::Unknown;
    loop {
        let current = health_rx.borrow().clone();
        if current != last_health {
            println!("{}", view::health_line(&current));
            last_health = current;
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "tenant" => match TenantId::new(rest) {
                Ok(id) => {
                    println!("tenant set to '{id}'");
                    tenant = Some(id);
                }
                Err(err) => println!("error: {err}"),
            },
            "health" => {
                let outcome = health::probe(&client).await;
                println!("{}", view::health_line(&outcome));
            }
            "add" => {
                let Some(tenant) = tenant.as_ref() else {
                    println!("Please enter a tenant id first: tenant <id>");
                    continue;
                };
                let Some((title, content)) = rest.split_once("::") else {
                    println!("usage: add <title> :: <content>");
                    continue;
                };
                form.title = title.trim().to_string();
                form.content = content.trim().to_string();
                form.submit(&mut create, &client, tenant).await;
            }
            "search" => {
                let Some(tenant) = tenant.as_ref() else {
                    println!("Please enter a tenant id first: tenant <id>");
                    continue;
                };
                search.submit(&client, tenant, rest).await;
            }
            "page" => {
                let Some(tenant) = tenant.as_ref() else {
                    println!("Please enter a tenant id first: tenant <id>");
                    continue;
                };
                match rest.trim().parse::<u32>() {
                    Ok(display_page) if display_page >= 1 => {
                        search.select_page(&client, tenant, display_page - 1).await;
                    }
                    _ => println!("usage: page <n> (1-based)"),
                }
            }
            "open" => {
                let Some(tenant) = tenant.as_ref() else {
                    println!("Please enter a tenant id first: tenant <id>");
                    continue;
                };
                let Some(id) = parse_document_id(rest) else {
                    println!("usage: open <id>");
                    continue;
                };
                detail.run(client.get_document(tenant, id)).await;
            }
            "delete" => {
                let Some(tenant) = tenant.as_ref() else {
                    println!("Please enter a tenant id first: tenant <id>");
                    continue;
                };
                let Some(id) = parse_document_id(rest) else {
                    println!("usage: delete <id>");
                    continue;
                };
                let outcome = delete.run(client.delete_document(tenant, id)).await;
                // Re-fetch the current page so the removal is visible; there
                // is no client-side cache to invalidate.
                if outcome.succeeded().is_some() && search.last_query().is_some() {
                    search.refresh(&client, tenant).await;
                }
            }
            _ => println!("unknown command '{command}' (try 'help')"),
        }
    }

    Ok(())
}
