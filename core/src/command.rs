/// Menu commands, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    RegisterTeam,
    ShowTeams,
    Schedule,
    Simulate,
    UndoLast,
    Leaderboard,
    ShowResults,
    Performance,
    PredictWinner,
    Save,
    Load,
}

impl MenuCommand {
    /// Menu order, as displayed.
    pub const ALL: [MenuCommand; 12] = [
        MenuCommand::RegisterTeam,
        MenuCommand::ShowTeams,
        MenuCommand::Schedule,
        MenuCommand::Simulate,
        MenuCommand::UndoLast,
        MenuCommand::Leaderboard,
        MenuCommand::ShowResults,
        MenuCommand::Performance,
        MenuCommand::PredictWinner,
        MenuCommand::Save,
        MenuCommand::Load,
        MenuCommand::Exit,
    ];

    pub fn from_selection(selection: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.selection() == selection)
    }

    pub fn selection(&self) -> u32 {
        match self {
            Self::Exit          => 0,
            Self::RegisterTeam  => 1,
            Self::ShowTeams     => 2,
            Self::Schedule      => 3,
            Self::Simulate      => 4,
            Self::UndoLast      => 5,
            Self::Leaderboard   => 6,
            Self::ShowResults   => 7,
            Self::Performance   => 8,
            Self::PredictWinner => 9,
            Self::Save          => 10,
            Self::Load          => 11,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit          => "Exit",
            Self::RegisterTeam  => "Register Team",
            Self::ShowTeams     => "Show Teams",
            Self::Schedule      => "Schedule Matches",
            Self::Simulate      => "Simulate Matches",
            Self::UndoLast      => "Undo Last Match",
            Self::Leaderboard   => "Leaderboard",
            Self::ShowResults   => "Show Results",
            Self::Performance   => "Show Graph/Check Indirect Win",
            Self::PredictWinner => "Predict Winner",
            Self::Save          => "Save Teams to File",
            Self::Load          => "Load Teams from File",
        }
    }
}
