//! Staff directory command handlers.

use tabled::Tabled;

use wardline_core::{
    AuditAction, AuditSeverity, StaffMember, StaffRole, datasets,
};

use crate::cli::{GlobalOpts, StaffArgs, StaffCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct StaffRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "ROLE")]
    role: String,
    #[tabled(rename = "DEPARTMENT")]
    department: String,
    #[tabled(rename = "ON DUTY")]
    on_duty: String,
}

fn staff_row(member: &StaffMember) -> StaffRow {
    StaffRow {
        id: member.id.clone(),
        name: member.name.clone(),
        role: member.role.to_string(),
        department: member.department.clone(),
        on_duty: if member.on_duty { "yes" } else { "" }.into(),
    }
}

pub fn handle(ctx: &AppContext, args: StaffArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        StaffCommand::List { on_duty } => {
            util::require_active_site(ctx)?;
            let mut handle = ctx.session.dataset(datasets::STAFF, Vec::new());
            let mut roster: Vec<StaffMember> = handle.data().clone();
            if on_duty {
                roster.retain(|member| member.on_duty);
            }

            let rendered =
                output::render_list(&global.output, &roster, staff_row, |m| m.id.clone());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        StaffCommand::Add {
            name,
            role,
            department,
            on_duty,
        } => {
            let site = util::require_active_site(ctx)?;
            let role: StaffRole = util::parse_field(
                &role,
                "role",
                "one of physician, nurse, technician, pharmacist, administrator",
            )?;

            let id = ctx.session.id_factory("ST").next_id()?;
            let mut handle = ctx.session.dataset(datasets::STAFF, Vec::new());
            let mut roster: Vec<StaffMember> = handle.data().clone();
            roster.push(StaffMember {
                id: id.clone(),
                site_id: site.id.clone(),
                name: name.clone(),
                role,
                department,
                on_duty,
            });
            handle.set(roster)?;

            util::append_audit(
                ctx,
                "console",
                AuditAction::RecordUpdated,
                AuditSeverity::Info,
                format!("Added {name} to the staff directory as {id}"),
            )?;
            ctx.save()?;

            if !global.quiet {
                eprintln!("Added {name} as {id}");
            }
            Ok(())
        }
    }
}
