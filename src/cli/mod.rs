//! Command line front end.
//!
//! Every command restores the persisted session, checks access, calls one service and prints
//! the result. No logic lives here beyond argument mapping.

mod render;

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dioxus_logger::tracing;
use fleetdesk::{
    client::{
        access::{authorize, Access},
        api::{DashboardService, UserService, VehicleService},
        error::{api::ApiError, Error},
        ApiClient, Config, FileStorage, HttpClient, SessionStore,
    },
    model::{
        user::{NewUserDto, UserUpdateDto, ADMIN_ROLE, USER_ROLE},
        vehicle::{ChargingStatus, VehicleFormDto},
    },
};
use reqwest::StatusCode;

type Store = SessionStore<FileStorage, HttpClient>;

#[derive(Parser)]
#[command(name = "fleetdesk")]
#[command(about = "Fleet management console")]
#[command(
    after_help = "Environment:\n  FLEETDESK_API_URL       Base URL of the fleet API (required)\n  FLEETDESK_SESSION_DIR   Directory the session is kept in\n  FLEETDESK_LOG_LEVEL     Log verbosity (default: warn)"
)]
pub struct Cli {
    /// Log API traffic
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the current session
    Logout,
    /// Show the logged in user
    Whoami,
    /// Fleet counters
    Dashboard,
    /// Manage vehicles (administrators)
    Vehicles {
        #[command(subcommand)]
        command: VehicleCommand,
    },
    /// Manage personnel (administrators)
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Your own vehicles and profile
    My {
        #[command(subcommand)]
        command: MyCommand,
    },
}

#[derive(Subcommand)]
enum VehicleCommand {
    List,
    Show {
        id: i32,
    },
    Create(VehicleArgs),
    Update {
        id: i32,
        #[command(flatten)]
        changes: VehicleChanges,
    },
    Delete {
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
    Assign {
        id: i32,
        #[arg(long = "user")]
        user_id: i32,
    },
    Unassign {
        id: i32,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    List,
    Create(UserArgs),
    Update {
        id: i32,
        #[command(flatten)]
        changes: UserChanges,
    },
    Delete {
        id: i32,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
    /// Vehicles assigned to a user
    Vehicles {
        id: i32,
    },
}

#[derive(Subcommand)]
enum MyCommand {
    Vehicles,
    Profile,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChargingArg {
    Charging,
    FullyCharged,
    NotCharging,
    Faulty,
}

impl From<ChargingArg> for ChargingStatus {
    fn from(arg: ChargingArg) -> Self {
        match arg {
            ChargingArg::Charging => Self::Charging,
            ChargingArg::FullyCharged => Self::FullyCharged,
            ChargingArg::NotCharging => Self::NotCharging,
            ChargingArg::Faulty => Self::Faulty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Admin,
    User,
}

impl RoleArg {
    fn tag(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_ROLE,
            Self::User => USER_ROLE,
        }
    }
}

#[derive(Args)]
struct VehicleArgs {
    #[arg(long)]
    number: String,
    #[arg(long)]
    brand: String,
    #[arg(long)]
    model: String,
    /// Current charge in percent
    #[arg(long, default_value_t = 0.0)]
    charge: f64,
    /// Maximum payload in kg
    #[arg(long, default_value_t = 0.0)]
    payload: f64,
    #[arg(long, value_enum, default_value_t = ChargingArg::NotCharging)]
    charging: ChargingArg,
}

impl From<VehicleArgs> for VehicleFormDto {
    fn from(args: VehicleArgs) -> Self {
        Self {
            vehicle_number: args.number,
            brand: args.brand,
            model: args.model,
            current_charge_percentage: args.charge,
            max_payload_kg: args.payload,
            charging_status: ChargingStatus::from(args.charging).code(),
        }
    }
}

/// Fields to change; anything left out keeps its current value.
#[derive(Args)]
struct VehicleChanges {
    #[arg(long)]
    number: Option<String>,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    charge: Option<f64>,
    #[arg(long)]
    payload: Option<f64>,
    #[arg(long, value_enum)]
    charging: Option<ChargingArg>,
}

impl VehicleChanges {
    fn apply(self, form: &mut VehicleFormDto) {
        if let Some(number) = self.number {
            form.vehicle_number = number;
        }
        if let Some(brand) = self.brand {
            form.brand = brand;
        }
        if let Some(model) = self.model {
            form.model = model;
        }
        if let Some(charge) = self.charge {
            form.current_charge_percentage = charge;
        }
        if let Some(payload) = self.payload {
            form.max_payload_kg = payload;
        }
        if let Some(charging) = self.charging {
            form.charging_status = ChargingStatus::from(charging).code();
        }
    }
}

#[derive(Args)]
struct UserArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, value_enum, default_value_t = RoleArg::User)]
    role: RoleArg,
}

impl From<UserArgs> for NewUserDto {
    fn from(args: UserArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone_number: args.phone,
            address: args.address,
            password: args.password,
            role: args.role.tag().to_string(),
        }
    }
}

#[derive(Args)]
struct UserChanges {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long, value_enum)]
    role: Option<RoleArg>,
}

impl UserChanges {
    fn apply(self, user: &mut UserUpdateDto) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone_number = phone;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(role) = self.role {
            user.role = role.tag().to_string();
        }
    }
}

pub async fn run(cli: Cli, config: &Config) -> Result<(), Error> {
    let storage = match &config.session_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default_location()?,
    };
    let http = HttpClient::new(config.api_url.as_str())?;
    let store = SessionStore::new(storage, http.clone());
    store.restore();
    let api = ApiClient::new(http, store.clone());

    match cli.command {
        Command::Login { email, password } => {
            let session = store.login(&email, &password).await?;
            println!(
                "Logged in as {} ({})",
                session.identity.display_name(),
                session.identity.role
            );
        }
        Command::Logout => {
            store.logout();
            println!("Logged out");
        }
        Command::Whoami => {
            let session = authorize(&store, Access::Member)?;
            render::identity(&session.identity);
        }
        Command::Dashboard => {
            let session = authorize(&store, Access::Member)?;
            let stats = DashboardService::new(&api)
                .stats(session.is_admin())
                .await?;
            render::dashboard(&stats, session.is_admin());
        }
        Command::Vehicles { command } => vehicles(&store, &api, command).await?,
        Command::Users { command } => users(&store, &api, command).await?,
        Command::My { command } => {
            authorize(&store, Access::Member)?;
            match command {
                MyCommand::Vehicles => render::vehicles(&VehicleService::new(&api).mine().await?),
                MyCommand::Profile => render::user(&UserService::new(&api).profile().await?),
            }
        }
    }

    Ok(())
}

async fn vehicles(store: &Store, api: &ApiClient, command: VehicleCommand) -> Result<(), Error> {
    authorize(store, Access::Admin)?;
    let service = VehicleService::new(api);

    match command {
        VehicleCommand::List => render::vehicles(&service.list().await?),
        VehicleCommand::Show { id } => render::vehicle(&service.get(id).await?),
        VehicleCommand::Create(args) => {
            let vehicle = service.create(&VehicleFormDto::from(args)).await?;
            println!("Vehicle created successfully!");
            render::vehicle(&vehicle);
        }
        VehicleCommand::Update { id, changes } => {
            let mut form = VehicleFormDto::from(&service.get(id).await?);
            changes.apply(&mut form);
            service.update(id, &form).await?;
            println!("Vehicle updated successfully!");
        }
        VehicleCommand::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this vehicle?") {
                println!("Cancelled");
                return Ok(());
            }

            service.delete(id).await?;
            println!("Vehicle deleted successfully!");
        }
        VehicleCommand::Assign { id, user_id } => {
            service.assign(id, user_id).await?;
            println!("Vehicle assigned successfully!");
        }
        VehicleCommand::Unassign { id } => {
            service.unassign(id).await?;
            println!("Vehicle unassigned successfully!");
        }
    }

    Ok(())
}

async fn users(store: &Store, api: &ApiClient, command: UserCommand) -> Result<(), Error> {
    authorize(store, Access::Admin)?;
    let service = UserService::new(api);

    match command {
        UserCommand::List => render::users(&service.list().await?),
        UserCommand::Create(args) => {
            let user = service.create(&NewUserDto::from(args)).await?;
            println!("User created successfully!");
            render::user(&user);
        }
        UserCommand::Update { id, changes } => {
            // There is no single-user endpoint; start from the listed record
            let current = service
                .list()
                .await?
                .into_iter()
                .find(|user| user.user_id == id)
                .ok_or_else(|| ApiError::Status {
                    status: StatusCode::NOT_FOUND,
                    message: format!("User {} not found", id),
                })?;

            let mut update = UserUpdateDto::from(&current);
            changes.apply(&mut update);
            service.update(id, &update).await?;
            println!("User updated successfully!");
        }
        UserCommand::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this user?") {
                println!("Cancelled");
                return Ok(());
            }

            service.delete(id).await?;
            println!("User deleted successfully!");
        }
        UserCommand::Vehicles { id } => {
            render::vehicles(&VehicleService::new(api).for_user(id).await?)
        }
    }

    Ok(())
}

/// Ask a yes/no question on the terminal; an unreadable or closed stdin declines.
fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if let Err(e) = io::stdout().flush() {
        tracing::warn!("Failed to show confirmation prompt: {}", e);
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_confirmation(&answer),
        Err(e) => {
            tracing::warn!("Failed to read confirmation: {}", e);
            false
        }
    }
}

fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
