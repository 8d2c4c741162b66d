//! Scripted play: a fixed list of answers, no prompting.

use mindreader_application::{
    AnswerInput, GameController, GameError, GameReply, SessionStore, TerminalPayload,
};
use mindreader_domain::PlayerId;

/// Result of a scripted game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    /// The reply to `start` followed by one reply per applied answer
    pub replies: Vec<GameReply>,
    /// Answers left over after the game ended
    pub unused_answers: usize,
}

impl ScriptRun {
    /// The final outcome, if the game ended
    pub fn outcome(&self) -> Option<&TerminalPayload> {
        self.replies.last().and_then(GameReply::terminal)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Plays one game from a list of answers
pub struct ScriptRunner<'a, S: SessionStore + 'static> {
    controller: &'a GameController<S>,
    player: PlayerId,
}

impl<'a, S: SessionStore + 'static> ScriptRunner<'a, S> {
    pub fn new(controller: &'a GameController<S>, player: PlayerId) -> Self {
        Self { controller, player }
    }

    /// Start a game and feed it `answers` until it ends or they run out.
    ///
    /// Answers may be bare tokens or `attribute:token`. A game still
    /// running when the answers run out is abandoned, as is one hit by a
    /// rejected answer.
    pub async fn run(&self, answers: &[String]) -> Result<ScriptRun, GameError> {
        let mut replies = vec![self.controller.start(&self.player).await];
        let mut unused_answers = 0;

        for (index, answer) in answers.iter().enumerate() {
            if replies.last().is_some_and(GameReply::is_terminal) {
                unused_answers = answers.len() - index;
                break;
            }

            let input = AnswerInput::from_callback_data(self.player.clone(), answer);
            match self.controller.answer(input).await {
                Ok(reply) => replies.push(reply),
                Err(e) => {
                    self.controller.abandon(&self.player).await;
                    return Err(e);
                }
            }
        }

        let run = ScriptRun {
            replies,
            unused_answers,
        };
        if !run.is_finished() {
            self.controller.abandon(&self.player).await;
        }
        Ok(run)
    }
}
