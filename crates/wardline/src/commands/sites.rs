//! Site command handlers.

use tabled::Tabled;

use wardline_core::{Site, SiteTheme};

use crate::cli::{GlobalOpts, SitesArgs, SitesCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "CODE")]
    code: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "BEDS")]
    beds: u32,
    #[tabled(rename = "DEPARTMENTS")]
    departments: String,
    #[tabled(rename = "THEME")]
    theme: String,
    #[tabled(rename = "ACTIVE")]
    active: String,
}

fn site_row(site: &Site, active_code: Option<&str>) -> SiteRow {
    SiteRow {
        code: site.code.clone(),
        name: site.name.clone(),
        beds: site.beds,
        departments: site.departments.join(", "),
        theme: site.theme.to_string(),
        active: if active_code == Some(site.code.as_str()) {
            "*".into()
        } else {
            String::new()
        },
    }
}

fn site_detail(site: &Site) -> String {
    format!(
        "{} ({})\n  beds:        {}\n  departments: {}\n  theme:       {}\n  id:          {}",
        site.name,
        site.code,
        site.beds,
        site.departments.join(", "),
        site.theme,
        site.id,
    )
}

pub fn handle(ctx: &AppContext, args: SitesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let store = ctx.session.store();

    match args.command {
        SitesCommand::List => {
            let sites: Vec<Site> = store
                .sites_snapshot()
                .iter()
                .map(|site| site.as_ref().clone())
                .collect();
            let active = ctx.session.active_site();
            let active_code = active.as_ref().map(|site| site.code.as_str());

            let rendered = output::render_list(
                &global.output,
                &sites,
                |site| site_row(site, active_code),
                |site| site.code.clone(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        SitesCommand::Add {
            code,
            name,
            beds,
            departments,
            theme,
        } => {
            let theme: SiteTheme = util::parse_field(
                &theme,
                "theme",
                "one of teal, indigo, amber, crimson",
            )?;

            let mut site = Site::new(&code, name);
            site.beds = beds;
            site.departments = departments;
            site.theme = theme;

            let site = store.register_site(site)?;
            ctx.save()?;
            if !global.quiet {
                eprintln!("Registered site {} ({})", site.code, site.name);
            }
            Ok(())
        }

        SitesCommand::Use { site } => {
            let site = store.activate(&site)?;
            ctx.save()?;
            if !global.quiet {
                eprintln!("Active site: {} ({})", site.code, site.name);
            }
            Ok(())
        }

        SitesCommand::Current => {
            let site = util::require_active_site(ctx)?;
            let rendered = output::render_single(
                &global.output,
                site.as_ref(),
                site_detail,
                |site| site.code.clone(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        SitesCommand::Remove { site } => {
            if !util::confirm(
                &format!("Remove site '{site}' and all of its data? This is destructive."),
                global.yes,
            )? {
                return Ok(());
            }
            let removed = store.remove_site(&site)?;
            ctx.save()?;
            if !global.quiet {
                eprintln!("Removed site {} and its data", removed.code);
            }
            Ok(())
        }
    }
}
