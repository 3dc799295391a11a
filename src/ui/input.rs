use crate::config::{BoardConfig, FormRules};
use crate::domain::project::ProjectId;
use crate::domain::validation::describe_violations;
use crate::error::Result;
use crate::state::SharedState;
use crate::ui::component::{mount, select};
use crate::ui::dom::{Dom, InsertPosition, NodeId, SharedDom};
use tracing::{debug, warn};

const INPUT_ELEMENT_ID: &str = "user-input";
const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again";

/// Validated form contents
#[derive(Debug, Clone, PartialEq)]
struct UserInput {
    title: String,
    description: String,
    people: u32,
}

/// The project form
pub struct ProjectInput {
    state: SharedState,
    dom: SharedDom,
    element: NodeId,
    title_input: NodeId,
    description_input: NodeId,
    people_input: NodeId,
    rules: FormRules,
}

impl ProjectInput {
    /// Mounts the form at the start of the host element
    pub fn new(state: SharedState, dom: SharedDom, config: &BoardConfig) -> Result<Self> {
        let (element, title_input, description_input, people_input) = {
            let mut dom = dom.borrow_mut();
            let element = mount(
                &mut *dom,
                &config.templates.input,
                &config.host_id,
                InsertPosition::AfterBegin,
                Some(INPUT_ELEMENT_ID),
            )?;
            (
                element,
                select(&*dom, element, "#title")?,
                select(&*dom, element, "#description")?,
                select(&*dom, element, "#people")?,
            )
        };

        Ok(Self {
            state,
            dom,
            element,
            title_input,
            description_input,
            people_input,
            rules: config.form.clone(),
        })
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn title_input(&self) -> NodeId {
        self.title_input
    }

    pub fn description_input(&self) -> NodeId {
        self.description_input
    }

    pub fn people_input(&self) -> NodeId {
        self.people_input
    }

    /// Handles a form submission
    ///
    /// Invalid input raises an alert and leaves the board untouched; valid
    /// input adds an active project and clears the form.
    pub fn submit_handler(&self) -> Result<Option<ProjectId>> {
        let Some(input) = self.gather_user_input()? else {
            self.dom.borrow_mut().alert(INVALID_INPUT_MESSAGE);
            return Ok(None);
        };

        debug!(title = %input.title, people = input.people, "submitting project");
        let id = self
            .state
            .borrow_mut()
            .add_project(input.title, input.description, input.people);
        self.clear_inputs()?;
        Ok(Some(id))
    }

    fn gather_user_input(&self) -> Result<Option<UserInput>> {
        let (title, description, people) = {
            let dom = self.dom.borrow();
            (
                dom.value(self.title_input)?,
                dom.value(self.description_input)?,
                dom.value(self.people_input)?,
            )
        };

        let title_check = self.rules.title.check(title.as_str());
        let description_check = self.rules.description.check(description.as_str());
        let people_count = parse_people(&people);

        let mut valid = true;
        for (field, check) in [("title", &title_check), ("description", &description_check)] {
            let violations = check.violations();
            if !violations.is_empty() {
                warn!(
                    field,
                    violations = %describe_violations(&violations),
                    "rejected form input"
                );
                valid = false;
            }
        }

        match people_count {
            Some(count) => {
                let violations = self.rules.people.check(count).violations();
                if !violations.is_empty() {
                    warn!(
                        field = "people",
                        violations = %describe_violations(&violations),
                        "rejected form input"
                    );
                    valid = false;
                }
            }
            None => {
                warn!(
                    field = "people",
                    value = %people,
                    "rejected form input: not a positive whole number"
                );
                valid = false;
            }
        }

        if !valid {
            return Ok(None);
        }

        Ok(people_count.map(|people| UserInput {
            title,
            description,
            people,
        }))
    }

    fn clear_inputs(&self) -> Result<()> {
        let mut dom = self.dom.borrow_mut();
        dom.set_value(self.title_input, "")?;
        dom.set_value(self.description_input, "")?;
        dom.set_value(self.people_input, "")?;
        Ok(())
    }
}

/// Parses the headcount field
///
/// The field is always required: blank, zero, fractional or negative input
/// yields None whatever the configured rules say.
fn parse_people(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|count| *count > 0)
}
