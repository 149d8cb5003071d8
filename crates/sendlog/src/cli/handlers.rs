//! Dispatch from parsed arguments to the API, and from results to the terminal.
//!
//! Each `handle_*` function converts CLI strings into library types, makes exactly
//! one API call and prints the returned `CmdResult`. Errors bubble up to `main`.

use super::print::{print_catalogue, print_climb_detail, print_messages, print_users};
use super::setup::{Cli, Commands, FilterArgs, FriendsAction, PlaceArgs};
use super::telemetry::init_tracing;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use colored::Colorize;
use sendlogapp::commands::CmdResult;
use sendlogapp::config::save_user;
use sendlogapp::error::{Result, SendlogError};
use sendlogapp::filter::ClimbFilter;
use sendlogapp::init::{initialize, SendlogContext};
use sendlogapp::model::{ClimbFields, Discipline};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data)?;
    let outcome = dispatch(&mut ctx, cli.command);
    if let Err(SendlogError::Unauthenticated) = &outcome {
        eprintln!(
            "{}",
            "Run `sendlog register <name> --email <email>` or set SENDLOG_USER.".dimmed()
        );
    }
    outcome
}

fn dispatch(ctx: &mut SendlogContext, command: Commands) -> Result<()> {
    match command {
        Commands::Register { name, email } => handle_register(ctx, &join_words(&name), &email),
        Commands::Whoami => handle_whoami(ctx),
        Commands::Add {
            name,
            discipline,
            grade,
            location,
            place,
        } => {
            let fields =
                ClimbFields::new(join_words(&name), discipline.parse()?, grade, location);
            handle_add(ctx, apply_place(fields, place))
        }
        Commands::Edit {
            climb,
            name,
            discipline,
            grade,
            location,
            place,
        } => handle_edit(
            ctx,
            &climb,
            EditArgs {
                name,
                discipline,
                grade,
                location,
                place,
            },
        ),
        Commands::List { filter } => handle_list(ctx, &filter),
        Commands::Show { climb, from } => handle_show(ctx, &climb, from.as_deref()),
        Commands::Delete { climb } => print_result(ctx.api.delete_climb(&climb)?),
        Commands::Attempt { climb, notes, date } => {
            let date = parse_date(date.as_deref())?;
            print_result(ctx.api.log_attempt(&climb, date, &join_words(&notes))?)
        }
        Commands::Note {
            climb,
            attempt,
            notes,
        } => print_result(
            ctx.api
                .edit_attempt_notes(&climb, &attempt, &join_words(&notes))?,
        ),
        Commands::Send { climb, notes, date } => {
            let date = parse_date(date.as_deref())?;
            print_result(ctx.api.send_climb(&climb, date, &join_words(&notes))?)
        }
        Commands::Unsend { climb } => print_result(ctx.api.unsend_climb(&climb)?),
        Commands::Link { climb, name, url } => print_result(ctx.api.add_link(&climb, &name, &url)?),
        Commands::Friends { action } => handle_friends(ctx, action.unwrap_or(FriendsAction::List)),
        Commands::Browse { email, filter } => handle_browse(ctx, &email, &filter),
        Commands::Copy { email, climb } => print_result(ctx.api.copy_climb(&email, &climb)?),
    }
}

struct EditArgs {
    name: Option<String>,
    discipline: Option<String>,
    grade: Option<String>,
    location: Option<String>,
    place: PlaceArgs,
}

fn handle_register(ctx: &mut SendlogContext, name: &str, email: &str) -> Result<()> {
    let result = ctx.api.register(name, email)?;
    print_messages(&result.messages);
    if let Some(profile) = result.users.first() {
        let path = save_user(&ctx.config_dir, &profile.email)?;
        println!(
            "{}",
            format!("Signed in as {} (saved to {})", profile.email, path.display()).dimmed()
        );
    }
    Ok(())
}

fn handle_whoami(ctx: &mut SendlogContext) -> Result<()> {
    let result = ctx.api.whoami()?;
    print_users(&result.users);
    Ok(())
}

fn handle_add(ctx: &mut SendlogContext, fields: ClimbFields) -> Result<()> {
    let result = ctx.api.add_climb(fields)?;
    print_messages(&result.messages);
    for climb in &result.affected_climbs {
        println!("{}", format!("id: {}", climb.id).dimmed());
    }
    Ok(())
}

fn handle_edit(ctx: &mut SendlogContext, climb: &str, args: EditArgs) -> Result<()> {
    let mut fields = ctx.api.climb_fields(climb)?;
    if let Some(name) = args.name {
        fields.name = name;
    }
    if let Some(discipline) = args.discipline {
        fields.discipline = discipline.parse()?;
    }
    if let Some(grade) = args.grade {
        fields.grade = grade;
    }
    if let Some(location) = args.location {
        fields.location = location;
    }
    let fields = apply_place(fields, args.place);
    print_result(ctx.api.edit_climb(climb, fields)?)
}

fn handle_list(ctx: &mut SendlogContext, args: &FilterArgs) -> Result<()> {
    let result = ctx.api.list_climbs(build_filter(args)?)?;
    if let Some(view) = &result.catalogue {
        print_catalogue(view, None);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut SendlogContext, climb: &str, from: Option<&str>) -> Result<()> {
    let result = ctx.api.show_climb(climb, from)?;
    for climb in &result.affected_climbs {
        print_climb_detail(climb, from.is_some());
    }
    Ok(())
}

fn handle_friends(ctx: &mut SendlogContext, action: FriendsAction) -> Result<()> {
    match action {
        FriendsAction::List => {
            let result = ctx.api.list_friends()?;
            print_users(&result.users);
            print_messages(&result.messages);
            Ok(())
        }
        FriendsAction::Add { email } => print_result(ctx.api.add_friend(&email)?),
        FriendsAction::Remove { email } => print_result(ctx.api.remove_friend(&email)?),
    }
}

fn handle_browse(ctx: &mut SendlogContext, email: &str, args: &FilterArgs) -> Result<()> {
    let result = ctx.api.browse_friend(email, build_filter(args)?)?;
    let owner = result.users.first().map(|u| u.name.as_str());
    if let Some(view) = &result.catalogue {
        print_catalogue(view, owner);
    }
    Ok(())
}

fn print_result(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn join_words(words: &[String]) -> String {
    words.join(" ")
}

fn apply_place(mut fields: ClimbFields, place: PlaceArgs) -> ClimbFields {
    if let Some(city) = place.city {
        fields.city = Some(city);
    }
    if let Some(region) = place.region {
        fields.region = Some(region);
    }
    if let Some(country) = place.country {
        fields.country = Some(country);
    }
    fields
}

/// Parses `YYYY-MM-DD` as noon UTC that day; no date means now.
fn parse_date(raw: Option<&str>) -> Result<DateTime<Utc>> {
    let Some(raw) = raw else {
        return Ok(Utc::now());
    };
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .map(|at| at.and_utc())
        .ok_or_else(|| {
            SendlogError::Validation(format!("'{}' is not a date, use YYYY-MM-DD", raw))
        })
}

/// Accepts `V5`, `v5` or `5` for boulder bounds and plain numbers for sport.
fn parse_grade_bound(raw: &str) -> Result<u32> {
    raw.trim()
        .trim_start_matches(|c: char| c == 'V' || c == 'v')
        .parse()
        .map_err(|_| SendlogError::Validation(format!("'{}' is not a grade bound", raw)))
}

fn build_filter(args: &FilterArgs) -> Result<ClimbFilter> {
    let mut filter = ClimbFilter::default();
    if let Some(discipline) = &args.discipline {
        filter = filter.with_discipline(discipline.parse::<Discipline>()?);
    }

    if args.min.is_some() || args.max.is_some() {
        let Some(full) = filter.grade_range else {
            return Err(SendlogError::Validation(
                "--min and --max need --discipline boulder or sport".to_string(),
            ));
        };
        let lo = match &args.min {
            Some(raw) => parse_grade_bound(raw)?,
            None => full.lo,
        };
        let hi = match &args.max {
            Some(raw) => parse_grade_bound(raw)?,
            None => full.hi,
        };
        filter = filter.with_grade_range(lo, hi);
    }

    if let Some(location) = &args.location {
        filter = filter.with_location(location.clone());
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use sendlogapp::filter::{DisciplineFilter, GradeRange};

    #[test]
    fn empty_filter_args_give_default_filter() {
        let filter = build_filter(&FilterArgs::default()).unwrap();
        assert!(!filter.is_active());
    }

    #[test]
    fn boulder_bounds_accept_v_prefix() {
        let args = FilterArgs {
            discipline: Some("Boulder".to_string()),
            min: Some("V3".to_string()),
            max: Some("6".to_string()),
            ..Default::default()
        };
        let filter = build_filter(&args).unwrap();
        assert_eq!(filter.discipline, DisciplineFilter::Only(Discipline::Boulder));
        assert_eq!(filter.grade_range, Some(GradeRange::new(3, 6)));
    }

    #[test]
    fn missing_bound_uses_scale_edge() {
        let args = FilterArgs {
            discipline: Some("sport".to_string()),
            min: Some("20".to_string()),
            ..Default::default()
        };
        let filter = build_filter(&args).unwrap();
        assert_eq!(filter.grade_range, Some(GradeRange::new(20, 35)));
    }

    #[test]
    fn bounds_without_graded_discipline_are_rejected() {
        let args = FilterArgs {
            min: Some("3".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_filter(&args),
            Err(SendlogError::Validation(_))
        ));

        let trad = FilterArgs {
            discipline: Some("trad".to_string()),
            max: Some("3".to_string()),
            ..Default::default()
        };
        assert!(build_filter(&trad).is_err());
    }

    #[test]
    fn dates_parse_to_noon_utc() {
        let at = parse_date(Some("2024-05-04")).unwrap();
        assert_eq!((at.year(), at.month(), at.day(), at.hour()), (2024, 5, 4, 12));
        assert!(parse_date(Some("04/05/2024")).is_err());
    }

    #[test]
    fn place_args_override_fields() {
        let fields = ClimbFields::new("Roof", Discipline::Boulder, "V4", "Bishop").with_city("Old");
        let place = PlaceArgs {
            city: Some("Bishop".to_string()),
            country: Some("USA".to_string()),
            ..Default::default()
        };
        let fields = apply_place(fields, place);
        assert_eq!(fields.city.as_deref(), Some("Bishop"));
        assert_eq!(fields.region, None);
        assert_eq!(fields.country.as_deref(), Some("USA"));
    }
}
