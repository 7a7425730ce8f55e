use clap::{Parser, Subcommand, ValueEnum};
use ts_app::{
    AppResult, ComparisonRequest, Session, StateSlot, compare_states, get_saturation_report,
    get_state_report, parse_property, parse_value, to_json,
};
use ts_core::units::{UnitSystem, convert};
use ts_steam::{PropertyValue, Specification};

#[derive(Parser)]
#[command(name = "ts-cli")]
#[command(about = "ThermoState CLI - Water/steam state resolution tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnitsArg {
    Si,
    English,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Si => UnitSystem::Si,
            UnitsArg::English => UnitSystem::English,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single state from two properties
    State {
        /// First property code (p, t, v, u, h, s, x)
        prop1: String,
        /// First property value
        value1: String,
        /// Second property code
        prop2: String,
        /// Second property value
        value2: String,
        /// Unit system the inputs are given in
        #[arg(long, value_enum, default_value_t = UnitsArg::Si)]
        units: UnitsArg,
        /// Convert the inputs and resolve in this unit system instead
        #[arg(long, value_enum)]
        to: Option<UnitsArg>,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve two states and show the property change between them
    Compare {
        /// State 1 first property code
        prop1: String,
        /// State 1 first property value
        value1: String,
        /// State 1 second property code
        prop2: String,
        /// State 1 second property value
        value2: String,
        /// State 2 first property code
        prop3: String,
        /// State 2 first property value
        value3: String,
        /// State 2 second property code
        prop4: String,
        /// State 2 second property value
        value4: String,
        /// Unit system the inputs are given in
        #[arg(long, value_enum, default_value_t = UnitsArg::Si)]
        units: UnitsArg,
        /// Convert the inputs and resolve in this unit system instead
        #[arg(long, value_enum)]
        to: Option<UnitsArg>,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up the saturation point at a pressure or a temperature
    Saturation {
        /// Saturation pressure (wins when both are given)
        #[arg(long)]
        pressure: Option<String>,
        /// Saturation temperature
        #[arg(long)]
        temperature: Option<String>,
        /// Unit system for input and output
        #[arg(long, value_enum, default_value_t = UnitsArg::Si)]
        units: UnitsArg,
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a property value between unit systems
    Convert {
        /// Property code (p, t, v, u, h, s, x)
        prop: String,
        /// Value to convert
        value: String,
        /// Unit system of the input
        #[arg(long, value_enum)]
        from: UnitsArg,
        /// Unit system to convert to
        #[arg(long, value_enum)]
        to: UnitsArg,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Commands::State {
            prop1,
            value1,
            prop2,
            value2,
            units,
            to,
            json,
        } => cmd_state(
            &prop1,
            &value1,
            &prop2,
            &value2,
            units.into(),
            to.map(Into::into),
            json,
        ),
        Commands::Compare {
            prop1,
            value1,
            prop2,
            value2,
            prop3,
            value3,
            prop4,
            value4,
            units,
            to,
            json,
        } => {
            let state1 = parse_pair(&prop1, &value1, &prop2, &value2, StateSlot::One)?;
            let state2 = parse_pair(&prop3, &value3, &prop4, &value4, StateSlot::Two)?;
            cmd_compare(state1, state2, units.into(), to.map(Into::into), json)
        }
        Commands::Saturation {
            pressure,
            temperature,
            units,
            json,
        } => cmd_saturation(
            pressure.as_deref(),
            temperature.as_deref(),
            units.into(),
            json,
        ),
        Commands::Convert {
            prop,
            value,
            from,
            to,
        } => cmd_convert(&prop, &value, from.into(), to.into()),
    }
}

fn parse_pair(
    code1: &str,
    text1: &str,
    code2: &str,
    text2: &str,
    slot: StateSlot,
) -> AppResult<Specification> {
    let first = PropertyValue::new(parse_property(code1)?, parse_value(text1, slot)?);
    let second = PropertyValue::new(parse_property(code2)?, parse_value(text2, slot)?);
    Ok(Specification::new(first, second))
}

fn cmd_state(
    code1: &str,
    text1: &str,
    code2: &str,
    text2: &str,
    units: UnitSystem,
    to: Option<UnitSystem>,
    json: bool,
) -> AppResult<()> {
    let spec = parse_pair(code1, text1, code2, text2, StateSlot::One)?;

    // Hold the inputs in a session so a unit switch converts them
    // exactly once before resolution.
    let mut session = Session::new(units);
    session.state1 = spec;
    session.state2 = spec;
    if let Some(target) = to {
        session.set_unit_system(target);
    }

    let report = get_state_report(session.unit_system(), &session.state1)?;
    if json {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", report.text());
    }
    Ok(())
}

fn cmd_compare(
    state1: Specification,
    state2: Specification,
    units: UnitSystem,
    to: Option<UnitSystem>,
    json: bool,
) -> AppResult<()> {
    let mut session = Session::new(units);
    session.state1 = state1;
    session.state2 = state2;
    if let Some(target) = to {
        session.set_unit_system(target);
    }

    let comparison = compare_states(&ComparisonRequest::from_session(&session))?;
    if json {
        println!("{}", to_json(&comparison)?);
    } else {
        println!("{}", comparison.text());
    }
    Ok(())
}

fn cmd_saturation(
    pressure: Option<&str>,
    temperature: Option<&str>,
    units: UnitSystem,
    json: bool,
) -> AppResult<()> {
    let pressure = pressure
        .map(|text| parse_value(text, StateSlot::One))
        .transpose()?;
    let temperature = temperature
        .map(|text| parse_value(text, StateSlot::One))
        .transpose()?;

    let report = get_saturation_report(units, pressure, temperature)?;
    if json {
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", report.text());
    }
    Ok(())
}

fn cmd_convert(code: &str, text: &str, from: UnitSystem, to: UnitSystem) -> AppResult<()> {
    let kind = parse_property(code)?.kind();
    let value = parse_value(text, StateSlot::One)?;
    let converted = convert(kind, from, to, value);
    println!(
        "{:.3} {} = {:.3} {}",
        value,
        from.label(kind),
        converted,
        to.label(kind)
    );
    Ok(())
}
