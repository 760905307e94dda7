use std::time::Duration;

use crate::audio::asset::SoundAsset;

/// Falling chirp played when the theme switcher turns off.
pub static SWITCH_OFF: SoundAsset = SoundAsset::from_static(
    "switch-off",
    "data:audio/wav;base64,UklGRqQPAABXQVZFZm10IBAAAAABAAEAIlYAAESsAAACABAAZGF0YYAPAAAAAK8AxwHcAnkDPAP1AbH/wPyr+Rr3svXz9Rf4APwzAegGJwzyD3YRMBASDI0Fhv019fztJOmr5wvqJfA4+fgDwA7PF5Qd8h50G2cT2weA+l3tSOOj3UbdOOKy6zv45QWaEmwc3iEjIjUd2xOIBx76pu0F5K3eaN4542HsdvihBeURZxu8IBshfByXE8kH3PrD7k/l6N9Y37DjQuzA920EYxDYGWYfPCBBHBIU7giC/KjwJOde4S3gueN06zT2WwIdDroXyB1nH14cJxXXCvr+T/OR6SzjDuGB4yPq9fOC/xQL+RS/G2weoBylFl8NLwK69qzse+Uy4kbjiegx8fj7SQd/ER4ZDh3CHEoYURADBuL6i/B76NvjUuPu5iTu5vfHAjcNtBUIG3McxRlmE0UKtv889VnsUOb846zlHuuH8679HQhaERQYVxuzGkIWrA4IBbn6NPHT6aDlLeWI6DLvNfhHAvwL9hMVGaYachjQEo4K2AAQ95Tuk+ji5d/mYOvA8vP7rAWQDmEVLhlzGSsWzw9GB8T9m/QS7TPoqeak6NvtkfWw/vMHExDwFb8YHxgrFHMN5wS5+yvzauxj6KDnN+rJ74/3cwA/Cb0Q6BUOGOcWoBLTC3ADn/qS8mPs5+iT6G/rFPG5+FIBtAm8EHgVRxftFZ0R8ArRAlr6r/LX7JzpaOk+7LrxG/lgAW4JLhC8FH0WORUgEcAK+ALT+mjzs+116hrqquzK8cj4swB/CCEPuhOwFcQUGREvC9AD+fuz9PLueOu36sXsWfHW91//8waXDWoSzRR0FGwRIAxDBb/9jfag8LvsXuuz7IvwYvZz/dAEhgu1ELMTHxTvEW4NNQcUAPn4zvJe7jnspOyO75P0C/sfAuUIgA43EpQTbBLpDoAJ5gL2+5D1h/B+7dTsnu6d8kz48P6uBa0LKRCTEp8SThDuCxAGdv/z+FvzY++J7QXuxfBt9WX76gEsCF8N3hA7Ek4RNQ5YCVUD7/zx9hzyCO8W7mHvvfK99779AAS8CTwO8xCMEfcPaQxWB18BRfvG9ZHxKe/Y7qTwU/Rv+VP/RQWMCoEOqhDFENIOEAv3BSkAXfpH9Ybxju+Z76TxbfV7+i8A1wXDClwOMhAPEPsNNwo7BaP/HPpR9dbxFPBA8FHyBvbq+mQAzQV+CucNoQ96D3kN3QkXBbv/bfrP9W3yrvDE8KryJPbH+gMAOQXLCS4N/g4FD0UN9Ql7BWAAQfu29kjzXvEv8b/y3PUm+hz/JgSvCC4MPA6eDkkNZwpSBoUBkPwH+HD0NvKa8aryR/Uf+b/9nAInB9kKRg0nDmMNFQuCBxUDU/7H+ff1U/Mn8pTyi/TQ9wL8owAuBRwJ+gt3DWkN0wvlCPcEfQD6+/H31vQE863y2vNm9gX6Tv7CAuMGNwphDCINaAxICgMH9wKb/mv64PZg9DDzcfMa9fn3u/vz/ycE4Qe1ClQMkwxqC/4IlAWQAWT9h/ll9lj0l/M29CP2JPnk/PcA6wRPCMYKCgz6C5kKEAinBL8Ax/wt+Vf2kvQP9Nr03Pbb+YL9agEnBVAIjgqkC3YLCQqIBzgEdwCv/EX5mvb19IP0TvVA9yH6oP1cAe8E9gcgCjELDgu8CWEHPwSsAAv9v/kh93f17/SV9Vb3APpL/doATwRMB38Jrwq8CqcJjgerBE4B0v2T+uv3H/Zf9b31L/eM+ZP88/9PA1AGpQgQCm0Kswn3B2kFTQL5/sP7Afn89uj14vXo9t34jfuw/vEB/ASABzwJAgrACX0IXAaXA3cATv1v+iX4rPYo9qb2GPhX+if9PQBLA/8FFAhVCaIJ9AhfBwwFOQIx/0D8s/nM97v2mvZs9xr5d/tH/j8BFAR+Bj4IKQkoCT0IgQYfBFgBcv62+2r5yff79hP3DvjR+TD87P7AAWYEmQYjCN0Itwi1B/IFmwPsACn+l/t3+f33Tvd593r4N/qC/CH/0wFVBGgG2QeFCFwIZAe1BXoD6wBJ/tT7yfla+Kr3yPex+E76dfzx/oQB7wP3BWoHJQgYCEQHwAWwA0kBxf5i/Fr63fgQ+Ab4vfgl+hn8af7dADoDRgXQBrMH3AdGBwIGLgT3AZX/Pv0s+5H5kvhG+LT40Pl/+5j96P83Ak8E/wUdB5EHUAdhBtwE5gKsAGf+SPyE+kT5pfiz+G75xPqT/LH+6gAMA+QESAYWBz0HuwabBfoD/gHW/7P9yftD+kT54/go+Qz6eftN/V7/egFzAxkFSAblBuEGPwYOBWoDeQFp/2j9pftI+nD5LvmJ+Xj65Pus/af/pwGAAwgFGwaiBpIG7QXCBC0DUQFb/3X9yvuA+rT5d/nN+a76Bvy2/Zf/fwFDA70EywVWBlMGwwWyBDsDfQGg/839Lvzk+g76vfn2+bX66ft1/Tj/CQHDAj0EWQX9BR0GtwXTBIcD7wEuAGz+zvx3+4X6DPoV+p/6nfv6/Jf+UAABAoQDugSIBd4FtAUPBf4DmAL7AEz/rv1D/Cr7evpB+oT6PPtZ/MP9W//+AIwC4QPiBHoFnQVIBYQEYQP3AWUAzv5R/Q78IPua+ob65vqx+9X8O/7E/1ABvwLzA9METQVYBfMEKAQGA6cBJwCm/kP9GfxC+8/6x/or+/P7Dv1k/tv/UQGsAs4DoAQTBR0FvgT+A+0CogE2AMn+df1X/IX7Dvv9+lL7BvwK/Uj+qP8NAVsCeQNPBM0E6gSjBAAEDAPdAYkALf/i/cP85/td+zD7ZPv0+9T88v03/4oA0gH0AtoDcwSzBJUEHQRUA0sCFQHM/4j+Yv1x/Mf7cft0+9H7f/xx/ZT+0v8QAToCNwP0A2MEfQQ/BK8D2ALLAZ0AZf85/jH9YPzW+537ufsm/N780f3s/hoARgFYAjwD4QM7BEUE/ANoA5QCkAFvAEj/MP46/Xv8//vP++77W/wL/fL9AP8dADkBPAIUA7EDCQQUBNQDTAOHApQBhABt/2H+df24/Dr8AvwU/G/8C/3d/db+4//wAOwBwwJmA8oD6QO/A1EDpgLMAdIAy//I/t39Gf2L/D38M/xu/Or8nf17/nP/cwBrAUgC+wJ3A7UDrwNoA+MCLAJOAVoAYf90/qT9//yQ/F78bvy9/Eb9/v3Z/sj/uQCcAWMC/gJkA40DeAMmA5wC5gEPASYAPf9h/qP9D/2u/Ij8n/zw/Hf9Kf76/tz/vgCUAU0C3gI8A2IDTgMBA4AC1QELATAAVP+E/s39Pv3e/LT8wvwI/YD9Iv7j/rb/jABZAQ4CoAIEAzUDMAP0AogC8QE6AW8An//V/iD+i/0g/eX83vwM/Wv99f2g/mH/KgDxAKgBQgK2AvwCEQP0AqUCLAKPAdkAFgBT/5z+/P1+/Sn9BP0P/Ur9sf0+/ub+oP9dABYBuwFEAqgC4ALpAsQCcQL4AWABsgD7/0T/mv4G/pT9SP0o/Tb9cP3T/Vj+9/6m/1gABQGhASMCggK5AsUCpQJcAu0BYQHAABMAZ//F/jb+xP12/U/9U/2A/dT9Sv7a/nv/IgDIAGAB4wFIAokCowKUAl0CAgKJAfgAWgC3/xn/if4R/rb9f/1u/YX9wf0f/pn+KP/D/2EA+ACAAfEBRAJ1AoACZgInAskBUAHEAC0Alf8D/4H+Ff7H/Zr9kf2s/er9Rv68/kT/1v9pAPYAdAHdASkCVgJfAkYCDAK0AUMBwAAzAKX/G/+f/jj+6/29/bD9xP35/Uv+tf4y/7n/QwDKAEQBrAH7AS4CQQIzAgYCvQFbAeYAZADf/1v/4f53/iT+6/3R/dX9+P03/o/++/51//f/dwDxAF0BtgH2ARsCIgILAtgBiwEpAbgAPQDA/0b/1/55/jD+AP7t/fb9G/5Z/q/+Fv+J/wEAeQDrAE8BoQHcAf4BBQLwAcABegEfAbYARADP/13/9P6Z/lL+If4K/g7+K/5h/qz+Cf9y/+P/UwC/ACEBdAGyAdoB6gHgAb0BgwE2AdkAcQAEAJj/Mf/V/on+Uf4u/iT+Mv5X/pL+3/47/6D/CABxANMAKwFzAacBxwHPAcABmgFgARUBvABaAPX/kP8y/93+mP5l/kb+Pv5M/m/+pv7u/kP/of8DAGQAwQATAVgBiwGrAbYBqwGLAVkBFgHFAGwADQCw/1X/BP+//on+Zv5X/l3+d/6j/uD+Kv9//9n/NACNAN4AJQFdAYUBmgGbAYkBZAEvAewAnQBIAPH/mf9H//7+wv6V/nn+b/54/pP+wP77/kH/kf/l/zkAiwDWABcBSwFvAYMBhAFzAVIBIQHjAJsATAD7/6r/Xf8Y/93+sf6T/ob+i/6g/sX++P43/3//zP8aAGcAsADwACYBTQFmAW8BZwFQASkB9gC4AHIAJwDc/5H/TP8Q/97+uf6j/pz+pf69/uP+Ff9R/5X/3f8lAG0ArwDpABkBPQFSAVkBUgE7ARcB6ACuAG0AKADj/57/Xf8k//X+0f66/rH+tv7K/ur+Fv9M/4n/yv8NAFAAjwDIAPgAHgE3AUQBQwE0ARkB8gDBAIgASgAJAMr/i/9S/yD/+P7b/sr+xf7O/uP+BP8v/2L/m//Z/xYAVACNAMEA7QAPASUBMAEvASEBCAHkALgAhABLAA8A1P+a/2X/Nf8P//H+3/7Y/t3+7v4J/y7/W/+O/8X///83AG4AoQDMAPAACgEaAR4BGAEGAesAxwCbAGkAMwD9/8b/kv9i/zj/Fv/+/u/+6/7x/gL/HP8//2n/mP/M/wAANABnAJUAvgDfAPgABwEMAQgB+QDhAMEAmgBtAD0ACgDY/6f/ev9R/zD/Fv8F//3+//4K/x7/Ov9e/4f/tP/k/xQARABxAJoAvQDZAO0A+QD7APQA5QDOAK8AigBgADMABQDX/6v/gf9c/z3/Jf8V/w7/D/8Y/yr/Q/9i/4f/sP/c/wgANABeAIUApwDDANgA5QDrAOgA3QDLALIAkwBvAEcAHQDz/8n/of98/13/Qv8v/yL/Hf8g/yr/PP9U/3L/lP+6/+L/CgAyAFkAfACbALUAyADVANsA2QDRAMEAqwCPAG8ATAAmAAAA2f+0/5H/cv9Y/0T/Nf8u/y3/M/9A/1L/a/+I/6n/zP/x/xUAOgBcAHsAlwCtAL4AyADMAMoAwQCyAJ4AhQBnAEcAJAABAN7/vP+c/4D/Z/9U/0X/Pf87/z//Sf9Y/23/hv+i/8L/4/8EACYARgBkAH8AlgCoALUAvAC+ALoAsAChAI4AdgBaADwAHQD+/93/v/+i/4j/cv9g/1P/S/9J/0z/VP9h/3P/if+j/7//3f/7/w==",
    Some(Duration::from_millis(90)),
);
