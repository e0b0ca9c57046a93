use crate::nav::intent::NavIntent;
use crate::nav::state::NavState;
use crate::ui::mvi::Reducer;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Navigate(route) => state.push(route),
            NavIntent::Back => {
                state.pop();
            }
        }
        state
    }
}
