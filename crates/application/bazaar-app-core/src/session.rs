use bazaar_core::UserRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStep {
    #[default]
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
}

impl AuthStep {
    pub fn title(self) -> &'static str {
        match self {
            AuthStep::Login => "Sign in",
            AuthStep::Register => "Create account",
            AuthStep::ForgotPassword => "Forgot password",
            AuthStep::ResetPassword => "Reset password",
        }
    }
}

/// Visibility and step of the sign-in overlay. Whether a session is actually
/// valid is the backend's business.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthOverlay {
    current_user: Option<UserRef>,
    step: AuthStep,
    is_open: bool,
}

impl AuthOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, step: AuthStep) {
        self.is_open = true;
        self.step = step;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.step = AuthStep::Login;
    }

    /// Moves between steps of an open overlay; ignored while closed.
    pub fn go_to(&mut self, step: AuthStep) {
        if self.is_open {
            self.step = step;
        }
    }

    pub fn set_current_user(&mut self, user: Option<UserRef>) {
        self.current_user = user;
    }

    pub fn current_user(&self) -> Option<&UserRef> {
        self.current_user.as_ref()
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}
