use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with one of the demo accounts
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Path the login page was asked to return to
        #[arg(long)]
        redirect: Option<String>,
    },

    /// Sign out and remove the saved session
    Logout,

    /// Show the signed-in identity
    Whoami,

    /// Edit the signed-in profile
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        avatar: Option<String>,
    },

    /// Check whether the current session may open a protected path
    Gate {
        #[arg(long)]
        path: String,

        /// Allowed role (repeatable). Omit to admit any signed-in user
        #[arg(long = "role")]
        roles: Vec<String>,
    },

    /// Resolve the /dashboard dispatcher for the current session
    Dashboard,

    /// Sidebar menu for the signed-in role
    Nav {
        /// Current path, used to mark the active entry
        #[arg(long)]
        path: Option<String>,
    },

    /// Headline dashboard figures
    Stats,

    /// One page of the sample listing
    Items {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// List the demo accounts (without passwords)
    Accounts,
}
