use super::{Area, Effect, Guard, RuleContext, Script};
use crate::env::MapDimensions;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Camera, Position, Viewport};

/// Guarded trigger: where it listens, what must hold, what it does.
#[derive(Debug, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub area: Area,
    pub guards: &'static [Guard],
    pub effects: &'static [Effect],
}

impl Rule {
    pub fn matches(&self, context: &RuleContext<'_>) -> bool {
        self.area.contains(context.position) && self.guards.iter().all(|guard| guard.holds(context))
    }
}

/// Ordered rules; the first match wins.
#[derive(Debug, PartialEq, Eq)]
pub struct RuleTable {
    pub rules: &'static [Rule],
}

impl RuleTable {
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    pub fn first_match(&self, context: &RuleContext<'_>) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.matches(context))
    }

    /// Checks every coordinate the table mentions against the world size.
    pub fn validate(&self, world: MapDimensions) -> Result<(), RuleError> {
        self.rules
            .iter()
            .try_for_each(|rule| validate_rule(rule, world))
    }
}

/// Talk / Search / Use branches plus the line shown when none applies.
#[derive(Debug, PartialEq, Eq)]
pub struct InteractionTable {
    pub branches: RuleTable,
    pub fallback: &'static [Effect],
}

/// Branch chosen by [`InteractionTable::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched(&'static Rule),
    Fallback(&'static [Effect]),
}

impl Resolution {
    pub fn name(&self) -> &'static str {
        match self {
            Resolution::Matched(rule) => rule.name,
            Resolution::Fallback(_) => "fallback",
        }
    }

    pub fn effects(&self) -> &'static [Effect] {
        match self {
            Resolution::Matched(rule) => rule.effects,
            Resolution::Fallback(effects) => effects,
        }
    }
}

impl InteractionTable {
    pub fn resolve(&self, context: &RuleContext<'_>) -> Resolution {
        self.branches
            .first_match(context)
            .map_or(Resolution::Fallback(self.fallback), Resolution::Matched)
    }

    pub fn validate(&self, world: MapDimensions) -> Result<(), RuleError> {
        self.branches.validate(world)?;
        validate_effects("fallback", self.fallback, world)
    }
}

impl Script {
    pub fn validate(&self, world: MapDimensions) -> Result<(), RuleError> {
        validate_effects(self.name, self.steps, world)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule '{rule}' refers to {position}, outside the world")]
    OutOfBounds {
        rule: &'static str,
        position: Position,
    },

    #[error("rule '{rule}' places the camera at an invalid spot: {camera:?}")]
    InvalidCamera { rule: &'static str, camera: Camera },

    #[error("rule '{rule}' draws a sprite off screen at {position}")]
    SpriteOffScreen {
        rule: &'static str,
        position: Position,
    },
}

impl GameError for RuleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuleError::OutOfBounds { .. } => "RULE_OUT_OF_BOUNDS",
            RuleError::InvalidCamera { .. } => "RULE_INVALID_CAMERA",
            RuleError::SpriteOffScreen { .. } => "RULE_SPRITE_OFF_SCREEN",
        }
    }
}

fn validate_rule(rule: &Rule, world: MapDimensions) -> Result<(), RuleError> {
    let positions = rule
        .area
        .anchors()
        .into_iter()
        .chain(rule.guards.iter().filter_map(Guard::position));
    for position in positions {
        check_position(rule.name, position, world)?;
    }
    validate_effects(rule.name, rule.effects, world)
}

fn validate_effects(
    name: &'static str,
    effects: &'static [Effect],
    world: MapDimensions,
) -> Result<(), RuleError> {
    for effect in effects {
        match *effect {
            Effect::SetCell(position, _) => check_position(name, position, world)?,
            Effect::Reposition(camera) => check_camera(name, camera, world)?,
            Effect::Render(view) => {
                for sprite in view.sprites() {
                    if !Viewport::contains_local(sprite.at) {
                        return Err(RuleError::SpriteOffScreen {
                            rule: name,
                            position: sprite.at,
                        });
                    }
                }
            }
            Effect::Play(script) => script.validate(world)?,
            _ => {}
        }
    }
    Ok(())
}

fn check_position(
    rule: &'static str,
    position: Position,
    world: MapDimensions,
) -> Result<(), RuleError> {
    if world.contains(position) {
        Ok(())
    } else {
        Err(RuleError::OutOfBounds { rule, position })
    }
}

fn check_camera(rule: &'static str, camera: Camera, world: MapDimensions) -> Result<(), RuleError> {
    let origin_ok = Viewport::new(camera.viewport, world).is_ok();
    if origin_ok && Viewport::contains_local(camera.actor) {
        Ok(())
    } else {
        Err(RuleError::InvalidCamera { rule, camera })
    }
}
